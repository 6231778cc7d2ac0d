//! The narrow collaborator contract required from the event provider.

use techweek_core::types::Timestamp;

/// Errors from the event provider layer.
#[derive(Debug, thiserror::Error)]
pub enum LumaError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote event record no longer exists (deleted or cancelled).
    ///
    /// Distinguishable from transient failures: reconciliation treats this
    /// as a terminal signal driving the local deletion transition.
    #[error("Remote event not found: {event_id}")]
    NotFound { event_id: String },

    /// The provider returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Payload for creating the remote counterpart of a local event.
#[derive(Debug, Clone)]
pub struct CreateRemoteEvent {
    pub name: String,
    pub description: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
}

/// The provider's handle to a freshly created event.
#[derive(Debug, Clone)]
pub struct CreatedEvent {
    /// Provider-assigned event identifier.
    pub api_id: String,
    /// Public management/attendance URL.
    pub url: String,
    /// Creation timestamp on the provider side.
    pub created_at: Timestamp,
}

/// The mutable remote state reconciliation cares about.
#[derive(Debug, Clone)]
pub struct RemoteEvent {
    pub name: String,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
}

/// Remote event visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// Per-email outcome of an add-hosts call. Partial failure is acceptable
/// and must not fail the overall event creation.
#[derive(Debug, Clone)]
pub struct HostResult {
    pub email: String,
    pub success: bool,
    pub error: Option<String>,
}

/// The capability surface the lifecycle and reconciliation layers require
/// from the provider integration.
#[async_trait::async_trait]
pub trait EventProvider: Send + Sync {
    /// Create a remote event record, returning its id and URL.
    async fn create_event(&self, input: &CreateRemoteEvent) -> Result<CreatedEvent, LumaError>;

    /// Fetch the remote record's current name and time range.
    ///
    /// Fails with [`LumaError::NotFound`] when the record no longer exists.
    async fn get_event(&self, api_id: &str) -> Result<RemoteEvent, LumaError>;

    /// Flip the remote record's visibility. Fails loudly; `publish` must
    /// propagate this failure.
    async fn update_visibility(
        &self,
        api_id: &str,
        visibility: Visibility,
    ) -> Result<(), LumaError>;

    /// Add co-hosts to the remote event, one result per email.
    async fn add_hosts(
        &self,
        api_id: &str,
        emails: &[String],
    ) -> Result<Vec<HostResult>, LumaError>;
}
