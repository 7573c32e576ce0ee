use std::collections::HashMap;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Public URL advertised in the OpenAPI document
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub items: ItemsConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthConfig {
    #[serde(default = "default_verifier")]
    pub verifier: String, // "remote", "fixed"
    pub verify_url: Option<String>,
    #[serde(default = "default_verify_timeout_ms")]
    pub timeout_ms: u64,
    /// token -> identity, for the "fixed" verifier
    #[serde(default)]
    pub tokens: HashMap<String, TokenIdentity>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenIdentity {
    pub uid: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default = "default_backend")]
    pub backend: String, // "memory", "local"
    pub local_path: Option<String>,
    #[serde(default = "default_collection")]
    pub collection: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ItemsConfig {
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: default_base_url(),
            auth: AuthConfig::default(),
            storage: StorageConfig::default(),
            items: ItemsConfig::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            verifier: default_verifier(),
            verify_url: None,
            timeout_ms: default_verify_timeout_ms(),
            tokens: HashMap::new(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            local_path: None,
            collection: default_collection(),
        }
    }
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            seed_samples: default_seed_samples(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8080
}
fn default_base_url() -> String {
    "http://localhost:8080".into()
}
fn default_verifier() -> String {
    "remote".into()
}
fn default_verify_timeout_ms() -> u64 {
    5000
}
fn default_backend() -> String {
    "memory".into()
}
fn default_collection() -> String {
    shop_storage::DEFAULT_COLLECTION.into()
}
fn default_seed_samples() -> bool {
    true
}

impl Config {
    /// Defaults, then `shop-server.toml`, then `SHOP_*` env (nested keys
    /// split on `__`), then the bare `PORT` / `BASE_URL` variables set by
    /// the hosting platform.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("shop-server.toml"))
            .merge(Env::prefixed("SHOP_").split("__"))
            .merge(Env::raw().only(&["PORT", "BASE_URL"]))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config: Config = Self::figment().extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = Config::load().expect("defaults load");
            assert_eq!(config.port, 8080);
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.auth.verifier, "remote");
            assert_eq!(config.auth.timeout_ms, 5000);
            assert_eq!(config.storage.backend, "memory");
            assert_eq!(config.storage.collection, "users");
            assert!(config.items.seed_samples);
            Ok(())
        });
    }

    #[test]
    fn test_layering() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "shop-server.toml",
                r#"
                port = 9000

                [auth]
                verifier = "fixed"

                [auth.tokens.dev-token]
                uid = "dev"
                email = "dev@example.com"

                [storage]
                backend = "local"
                local_path = "./data"
                "#,
            )?;
            jail.set_env("SHOP_AUTH__TIMEOUT_MS", "250");
            jail.set_env("PORT", "8181");
            jail.set_env("BASE_URL", "https://shop-abc.a.run.app");

            let config = Config::load().expect("layered load");
            assert_eq!(config.port, 8181);
            assert_eq!(config.base_url, "https://shop-abc.a.run.app");
            assert_eq!(config.auth.verifier, "fixed");
            assert_eq!(config.auth.timeout_ms, 250);
            assert_eq!(config.auth.tokens["dev-token"].uid, "dev");
            assert_eq!(config.storage.backend, "local");
            assert_eq!(config.storage.local_path.as_deref(), Some("./data"));
            Ok(())
        });
    }
}
