// handlers/mod.rs - 2-tier handler tree
//
// Public (no session) → Protected (provider session required)
//
// Marketing pages live in crate::pages rather than here; everything under
// this module speaks JSON.

pub mod protected; // Session-gated account endpoints (/auth/profile, /dashboard/stats)
pub mod public; // Demo data, debug dumps, mail check

pub use protected::*;
pub use public::*;
