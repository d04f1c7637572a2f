use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use tracing::debug;

use crate::{error::IngestError, types::AccessToken};

type PendingToken = Shared<BoxFuture<'static, Result<AccessToken, IngestError>>>;

/// Source of access tokens for one remote service.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Stable key the token is cached under.
    fn key(&self) -> &str;

    /// Performs the (expensive) token request.
    async fn fetch_token(&self) -> Result<AccessToken, IngestError>;
}

/// Process-lifetime token cache with single-flight initialization.
///
/// Each provider key owns one slot holding a shared token future. The first
/// caller for a key starts the provider's fetch; everyone arriving while it is
/// in flight awaits that same future and gets the same outcome, success or
/// failure. A failed fetch is removed from its slot once it resolves, so the
/// next call starts a new one. Tokens are never invalidated.
#[derive(Default)]
pub struct CredentialCache {
    slots: Mutex<HashMap<String, PendingToken>>,
}

impl CredentialCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the access token for `provider`, fetching it at most once per
    /// key at a time.
    ///
    /// # Arguments
    ///
    /// * `provider` - The provider to fetch from; its [`CredentialProvider::key`]
    ///   selects the cache slot
    ///
    /// # Returns
    ///
    /// The bearer token string.
    ///
    /// # Errors
    ///
    /// Whatever the provider's fetch failed with, shared by every caller that
    /// waited on that fetch. `CredentialUnavailable` if the cache lock is
    /// poisoned.
    ///
    /// # Example
    ///
    /// ```
    /// let cache = CredentialCache::new();
    /// let provider: Arc<dyn CredentialProvider> = Arc::new(ClientCredentialsProvider::from_config(http)?);
    /// let token = cache.access_token(&provider).await?;
    /// ```
    pub async fn access_token<P>(&self, provider: &Arc<P>) -> Result<String, IngestError>
    where
        P: CredentialProvider + ?Sized + 'static,
    {
        let key = provider.key().to_string();
        let pending = self.slot(&key, provider)?;

        match pending.clone().await {
            Ok(token) => Ok(token.access_token),
            Err(e) => {
                self.forget(&key, &pending);
                Err(e)
            }
        }
    }

    /// Whether a token for `key` has been resolved successfully.
    pub fn is_cached(&self, key: &str) -> bool {
        self.slots
            .lock()
            .map(|slots| {
                slots
                    .get(key)
                    .is_some_and(|pending| matches!(pending.peek(), Some(Ok(_))))
            })
            .unwrap_or(false)
    }

    fn slot<P>(&self, key: &str, provider: &Arc<P>) -> Result<PendingToken, IngestError>
    where
        P: CredentialProvider + ?Sized + 'static,
    {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| IngestError::CredentialUnavailable {
                reason: format!("credential cache poisoned: {e}"),
            })?;

        let pending = slots.entry(key.to_string()).or_insert_with(|| {
            let provider = Arc::clone(provider);
            async move {
                debug!(provider = provider.key(), "fetching access token");
                provider.fetch_token().await
            }
            .boxed()
            .shared()
        });

        Ok(pending.clone())
    }

    /// Drops a failed fetch, unless a newer one already took its slot.
    fn forget(&self, key: &str, failed: &PendingToken) {
        if let Ok(mut slots) = self.slots.lock() {
            if slots.get(key).is_some_and(|current| current.ptr_eq(failed)) {
                slots.remove(key);
            }
        }
    }
}
