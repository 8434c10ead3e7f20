// Application ports - driven ports (output ports implemented by infrastructure)

pub mod identity_provider;
pub mod profile_store;

pub use identity_provider::{IdentityProvider, ProviderError};
pub use profile_store::{ProfileStore, StoreError};

#[cfg(test)]
pub use identity_provider::MockIdentityProvider;
#[cfg(test)]
pub use profile_store::MockProfileStore;
