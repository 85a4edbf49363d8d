// handlers/protected/mod.rs - Protected handlers (provider session required)
//
// Account endpoints. Each handler verifies its own credentials before doing
// any work: the profile endpoints exchange the session cookie for an account
// via the auth provider, the stats endpoint gates on credential presence and
// lets the database aggregate scope the result.
//
// Security Level: provider session (cookie) or bearer header + userId
// Middleware: session scope attaches the cookie token outside /client-portal

pub mod profile;
pub mod stats;

pub use profile::{profile_get, profile_post};
pub use stats::dashboard_stats;
