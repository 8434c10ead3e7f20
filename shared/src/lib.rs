pub mod protocol;

pub use protocol::{AuthErrorCode, RegisterRequest, RegisterResponse, Session};
