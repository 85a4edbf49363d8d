//! Backend API and page server for the Meridian Consulting site.
//!
//! The binary wires environment configuration into [`state::AppState`] and
//! serves [`router::app`]. Integration tests build the same router against
//! stand-in provider servers, which is why everything lives in the library
//! rather than the binary.

pub mod config;
pub mod demo;
pub mod error;
pub mod handlers;
pub mod mailer;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod state;
pub mod supabase;
