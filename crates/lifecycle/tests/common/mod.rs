//! Shared test fixtures: an in-memory fake provider and event builders.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use techweek_db::models::event::CreateEvent;
use techweek_lifecycle::{LifecycleService, Reconciler};
use techweek_luma::{
    CreateRemoteEvent, CreatedEvent, EventProvider, HostResult, LumaError, RemoteEvent, Visibility,
};
use techweek_notify::EmailQueue;

/// In-memory [`EventProvider`] with togglable failure modes.
#[derive(Default)]
pub struct FakeProvider {
    remote: Mutex<HashMap<String, RemoteEvent>>,
    next_id: AtomicU64,
    /// When set, `update_visibility` fails with a 500.
    pub fail_visibility: AtomicBool,
    /// When set, `get_event` fails with a 500 (transient fault).
    pub fail_get: AtomicBool,
}

impl FakeProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Overwrite the remote copy of an event, as if edited on Luma.
    pub fn set_remote(&self, api_id: &str, remote: RemoteEvent) {
        self.remote.lock().unwrap().insert(api_id.to_string(), remote);
    }

    /// Fetch the stored remote copy.
    pub fn remote(&self, api_id: &str) -> Option<RemoteEvent> {
        self.remote.lock().unwrap().get(api_id).cloned()
    }

    /// Remove the remote copy, as if the event was cancelled on Luma.
    pub fn cancel_remote(&self, api_id: &str) {
        self.remote.lock().unwrap().remove(api_id);
    }

    fn api_error() -> LumaError {
        LumaError::Api {
            status: 500,
            body: "fake provider failure".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl EventProvider for FakeProvider {
    async fn create_event(&self, input: &CreateRemoteEvent) -> Result<CreatedEvent, LumaError> {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let api_id = format!("evt-{n}");
        self.set_remote(
            &api_id,
            RemoteEvent {
                name: input.name.clone(),
                start_at: input.start_at,
                end_at: input.end_at,
            },
        );
        Ok(CreatedEvent {
            url: format!("https://lu.ma/{api_id}"),
            api_id,
            created_at: Utc::now(),
        })
    }

    async fn get_event(&self, api_id: &str) -> Result<RemoteEvent, LumaError> {
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(Self::api_error());
        }
        self.remote(api_id).ok_or_else(|| LumaError::NotFound {
            event_id: api_id.to_string(),
        })
    }

    async fn update_visibility(
        &self,
        _api_id: &str,
        _visibility: Visibility,
    ) -> Result<(), LumaError> {
        if self.fail_visibility.load(Ordering::SeqCst) {
            return Err(Self::api_error());
        }
        Ok(())
    }

    async fn add_hosts(
        &self,
        _api_id: &str,
        emails: &[String],
    ) -> Result<Vec<HostResult>, LumaError> {
        Ok(emails
            .iter()
            .map(|email| HostResult {
                email: email.clone(),
                success: true,
                error: None,
            })
            .collect())
    }
}

/// A plausible submission for "Rust Santiago".
pub fn sample_submission(title: &str) -> CreateEvent {
    CreateEvent {
        title: title.to_string(),
        description: "Monthly community meetup".to_string(),
        commune: "Providencia".to_string(),
        format: "meetup".to_string(),
        capacity: 80,
        logo_url: None,
        organizer_name: "Ana".to_string(),
        organizer_email: "ana@example.com".to_string(),
        start_at: Utc.with_ymd_and_hms(2025, 11, 17, 21, 0, 0).unwrap(),
        end_at: Utc.with_ymd_and_hms(2025, 11, 18, 0, 0, 0).unwrap(),
    }
}

/// A lifecycle service with suppressed email delivery.
pub fn service(pool: &PgPool, provider: Arc<FakeProvider>) -> LifecycleService {
    LifecycleService::new(pool.clone(), provider, EmailQueue::new(pool.clone(), None))
}

/// A reconciler with suppressed email delivery.
pub fn reconciler(pool: &PgPool, provider: Arc<FakeProvider>) -> Reconciler {
    Reconciler::new(pool.clone(), provider, EmailQueue::new(pool.clone(), None))
}
