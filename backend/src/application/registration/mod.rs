pub mod error;
pub mod register_user;

pub use error::RegistrationError;
