use serde::Deserialize;

/// Service configuration, layered from an optional `medportal.toml`
/// file and `MEDPORTAL__*` environment variables (env wins).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    pub identity: IdentityConfig,
    pub profile_store: ProfileStoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileStoreConfig {
    pub base_url: String,
    #[serde(default = "default_users_collection")]
    pub users_collection: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_users_collection() -> String {
    "users".to_string()
}

impl ServerConfig {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = config::Config::builder()
            .add_source(config::File::with_name("medportal").required(false))
            .add_source(config::Environment::with_prefix("MEDPORTAL").separator("__"))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
