use crate::config::Config;
use shop_identity::{AuthGate, FixedTokenVerifier, Identity, IdentityVerifier, RemoteVerifier};
use shop_storage::{
    DocumentBackend, InMemoryDocumentBackend, ItemStore, LocalDocumentBackend, UserDocumentStore,
};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub gate: AuthGate,
    pub items: Arc<ItemStore>,
    pub documents: UserDocumentStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let timeout = Duration::from_millis(config.auth.timeout_ms);

        // Build identity verifier
        let verifier: Arc<dyn IdentityVerifier> = match config.auth.verifier.as_str() {
            "remote" => {
                let url = config
                    .auth
                    .verify_url
                    .as_ref()
                    .ok_or_else(|| anyhow::anyhow!("remote verifier requires auth.verify_url"))?;
                tracing::info!("Verifying tokens against {}", url);
                Arc::new(
                    RemoteVerifier::new(url.clone(), timeout)
                        .map_err(|e| anyhow::anyhow!("Failed to build verifier: {e}"))?,
                )
            }
            "fixed" => {
                tracing::warn!(
                    tokens = config.auth.tokens.len(),
                    "Using fixed token table - NOT FOR PRODUCTION USE"
                );
                let mut fixed = FixedTokenVerifier::new();
                for (token, id) in &config.auth.tokens {
                    fixed.insert(token.clone(), Identity::new(id.uid.clone(), id.email.clone()));
                }
                Arc::new(fixed)
            }
            other => {
                anyhow::bail!(
                    "Unknown verifier '{}'. Valid options: 'remote', 'fixed'",
                    other
                );
            }
        };

        // Build document backend
        let backend: Arc<dyn DocumentBackend> = match config.storage.backend.as_str() {
            "local" => {
                let path = config
                    .storage
                    .local_path
                    .as_ref()
                    .ok_or_else(|| anyhow::anyhow!("local storage requires local_path"))?;
                Arc::new(LocalDocumentBackend::new(path).await?)
            }
            "memory" => Arc::new(InMemoryDocumentBackend::new()),
            other => {
                anyhow::bail!(
                    "Unknown storage backend '{}'. Valid options: 'memory', 'local'",
                    other
                );
            }
        };

        Ok(Self::from_parts(config, verifier, backend))
    }

    /// Assemble state around an already built verifier and backend
    pub fn from_parts(
        config: &Config,
        verifier: Arc<dyn IdentityVerifier>,
        backend: Arc<dyn DocumentBackend>,
    ) -> Self {
        let items = if config.items.seed_samples {
            ItemStore::with_sample_items()
        } else {
            ItemStore::new()
        };

        Self {
            gate: AuthGate::new(verifier)
                .with_timeout(Duration::from_millis(config.auth.timeout_ms)),
            items: Arc::new(items),
            documents: UserDocumentStore::new(backend, config.storage.collection.clone()),
            config: Arc::new(config.clone()),
        }
    }
}
