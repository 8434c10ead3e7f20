//! Client side of the MedPortal registration handshake: local form
//! validation, the `POST /register` call, and the follow-up interactive
//! sign-in against the identity provider.

pub mod auth;
pub mod error;
pub mod form;
pub mod notify;

pub use auth::AuthClient;
pub use error::ClientError;
pub use form::RegistrationForm;
pub use notify::{Notification, Notifier, Severity};
