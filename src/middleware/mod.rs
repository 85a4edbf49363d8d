pub mod response;
pub mod session;

pub use response::{ApiResult, Payload};
pub use session::{
    bearer_token, cookie_value, session_scope, SessionScope, SessionToken, CLIENT_PORTAL_PREFIX,
    SESSION_COOKIE,
};
