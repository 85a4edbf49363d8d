// handlers/public/mod.rs - Public handlers (no session required)
//
// Demo data, seed diagnostics and the mail delivery check. The debug
// handlers read through the service role client but only ever report on
// seeded fixture accounts.
//
// Security Level: None (completely public access)
// Middleware: session scope only (ignored by these handlers)

pub mod debug;
pub mod demo;
pub mod email;

pub use debug::{check_profiles, list_users, profile_check};
pub use demo::demo_get;
pub use email::test_simple_email;
