/**
 * Application Credentials
 *
 * This module defines the immutable credential set the gateway shares with
 * the broker. One `AppCredentials` value is constructed at startup from
 * configuration and injected into every component that signs something; it
 * is never mutated afterwards.
 *
 * # Secret Hygiene
 *
 * The shared secret and the encryption master key must never leave the
 * process. `AppCredentials` keeps both fields private, exposes them only to
 * the signing code through accessors, and redacts them from `Debug` output
 * so a stray `{:?}` in a log line cannot leak them.
 */

use crate::error::GatewayError;

/// Length in bytes of a decoded encryption master key.
pub const MASTER_KEY_LEN: usize = 32;

/// Immutable credentials for one broker application.
///
/// Constructed once at startup and shared read-only by all requests. All
/// fields are validated to be non-empty at construction so the signing code
/// never has to re-check them.
#[derive(Clone)]
pub struct AppCredentials {
    app_id: String,
    key: String,
    secret: String,
    cluster: String,
    encryption_master_key: Option<[u8; MASTER_KEY_LEN]>,
}

impl AppCredentials {
    /// Create a new credential set.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any of `app_id`, `key` or `secret`
    /// is empty. The cluster may be empty for single-cluster brokers.
    pub fn new(
        app_id: impl Into<String>,
        key: impl Into<String>,
        secret: impl Into<String>,
        cluster: impl Into<String>,
    ) -> Result<Self, GatewayError> {
        let app_id = app_id.into();
        let key = key.into();
        let secret = secret.into();

        if app_id.is_empty() {
            return Err(GatewayError::config("app id must not be empty"));
        }
        if key.is_empty() {
            return Err(GatewayError::config("app key must not be empty"));
        }
        if secret.is_empty() {
            return Err(GatewayError::config("app secret must not be empty"));
        }

        Ok(Self {
            app_id,
            key,
            secret,
            cluster: cluster.into(),
            encryption_master_key: None,
        })
    }

    /// Attach an encryption master key for private-encrypted channels.
    pub fn with_master_key(mut self, master_key: [u8; MASTER_KEY_LEN]) -> Self {
        self.encryption_master_key = Some(master_key);
        self
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The shared signing secret. Only the signing code should call this.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    pub fn master_key(&self) -> Option<&[u8; MASTER_KEY_LEN]> {
        self.encryption_master_key.as_ref()
    }
}

/// Redacts the secret and master key. The app id and key are public
/// identifiers and safe to log.
impl std::fmt::Debug for AppCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppCredentials")
            .field("app_id", &self.app_id)
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("cluster", &self.cluster)
            .field(
                "encryption_master_key",
                &self.encryption_master_key.map(|_| "<redacted>"),
            )
            .finish()
    }
}
