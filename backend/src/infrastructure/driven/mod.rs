pub mod identity;
pub mod profiles;

pub use identity::RestIdentityProvider;
pub use profiles::RestProfileStore;
