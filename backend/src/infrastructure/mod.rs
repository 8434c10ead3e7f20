// Infrastructure layer - external concerns (HTTP surface, remote services)
// Implements the ports defined in the application layer

use std::sync::Arc;

use crate::application::ports::{IdentityProvider, ProfileStore};

pub mod driven; // Output adapters (identity provider, document store)
pub mod driving; // Input adapters (HTTP)

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub profiles: Arc<dyn ProfileStore>,
    /// Document-store collection the profile records live in.
    pub users_collection: String,
}
