//! Integration tests for the administrator transitions.

mod common;

use std::sync::atomic::Ordering;

use assert_matches::assert_matches;
use common::{sample_submission, service, FakeProvider};
use sqlx::PgPool;
use techweek_core::lifecycle::EventStatus;
use techweek_core::CoreError;
use techweek_db::models::email::EmailStatus;
use techweek_db::repositories::{CohostRepo, EmailRepo, EventRepo};
use techweek_db::models::cohost::CreateCohost;
use techweek_lifecycle::LifecycleError;
use techweek_luma::LumaError;
use techweek_notify::{templates, DELIVERY_SUPPRESSED};

#[sqlx::test(migrations = "../../db/migrations")]
async fn approve_attaches_remote_event(pool: PgPool) {
    let provider = FakeProvider::new();
    let svc = service(&pool, provider.clone());
    let event = EventRepo::create(&pool, &sample_submission("Rust Santiago"))
        .await
        .unwrap();

    let approved = svc.approve(event.id).await.unwrap();

    assert_eq!(approved.status(), Some(EventStatus::WaitingLumaEdit));
    assert!(approved.approved_at.is_some());
    assert!(approved.waiting_luma_edit_at.is_some());
    assert_eq!(approved.luma_event_id.as_deref(), Some("evt-1"));
    assert_eq!(approved.luma_url.as_deref(), Some("https://lu.ma/evt-1"));

    let remote = provider.remote("evt-1").unwrap();
    assert_eq!(remote.name, "Rust Santiago");
    assert_eq!(remote.start_at, event.start_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn approve_queues_ready_to_edit_email(pool: PgPool) {
    let provider = FakeProvider::new();
    let svc = service(&pool, provider);
    let event = EventRepo::create(&pool, &sample_submission("Rust Santiago"))
        .await
        .unwrap();

    svc.approve(event.id).await.unwrap();

    let emails = EmailRepo::list_by_template(&pool, templates::TEMPLATE_READY_TO_EDIT)
        .await
        .unwrap();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].recipient, event.organizer_email);
    assert_eq!(emails[0].status_id, EmailStatus::Sent.id());
    assert_eq!(emails[0].delivery_note.as_deref(), Some(DELIVERY_SUPPRESSED));
    assert!(emails[0].body.contains("https://lu.ma/evt-1"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn approve_forwards_cohosts_to_provider(pool: PgPool) {
    let provider = FakeProvider::new();
    let svc = service(&pool, provider);
    let event = EventRepo::create(&pool, &sample_submission("Rust Santiago"))
        .await
        .unwrap();
    CohostRepo::create(
        &pool,
        event.id,
        &CreateCohost {
            company_name: "Acme".to_string(),
            logo_url: None,
            contact_name: "Bea".to_string(),
            contact_email: "bea@acme.cl".to_string(),
            contact_phone: None,
            website: None,
            linkedin: None,
        },
    )
    .await
    .unwrap();

    // Co-host registration is best-effort; approval must still land.
    let approved = svc.approve(event.id).await.unwrap();
    assert_eq!(approved.status(), Some(EventStatus::WaitingLumaEdit));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn approve_unknown_event_is_not_found(pool: PgPool) {
    let svc = service(&pool, FakeProvider::new());

    let err = svc.approve(9999).await.unwrap_err();
    assert_matches!(
        err,
        LifecycleError::Core(CoreError::NotFound { entity: "Event", id: 9999 })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn approve_twice_is_conflict(pool: PgPool) {
    let svc = service(&pool, FakeProvider::new());
    let event = EventRepo::create(&pool, &sample_submission("Rust Santiago"))
        .await
        .unwrap();

    svc.approve(event.id).await.unwrap();
    let err = svc.approve(event.id).await.unwrap_err();
    assert_matches!(err, LifecycleError::Core(CoreError::Conflict(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reject_requires_reason(pool: PgPool) {
    let svc = service(&pool, FakeProvider::new());
    let event = EventRepo::create(&pool, &sample_submission("Rust Santiago"))
        .await
        .unwrap();

    let err = svc.reject(event.id, "   ").await.unwrap_err();
    assert_matches!(err, LifecycleError::Core(CoreError::Validation(_)));

    let unchanged = EventRepo::find_by_id(&pool, event.id).await.unwrap().unwrap();
    assert_eq!(unchanged.status(), Some(EventStatus::Submitted));
    assert!(unchanged.rejection_reason.is_none());

    let emails = EmailRepo::list_by_template(&pool, templates::TEMPLATE_REJECTED)
        .await
        .unwrap();
    assert!(emails.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reject_records_reason_and_notifies(pool: PgPool) {
    let svc = service(&pool, FakeProvider::new());
    let event = EventRepo::create(&pool, &sample_submission("Rust Santiago"))
        .await
        .unwrap();

    let reason = "Venue capacity unconfirmed";
    let rejected = svc.reject(event.id, reason).await.unwrap();

    assert_eq!(rejected.status(), Some(EventStatus::Rejected));
    assert!(rejected.rejected_at.is_some());
    assert_eq!(rejected.rejection_reason.as_deref(), Some(reason));

    let emails = EmailRepo::list_by_template(&pool, templates::TEMPLATE_REJECTED)
        .await
        .unwrap();
    assert_eq!(emails.len(), 1);
    assert!(emails[0].body.contains(reason));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejected_event_can_be_approved_again(pool: PgPool) {
    let svc = service(&pool, FakeProvider::new());
    let event = EventRepo::create(&pool, &sample_submission("Rust Santiago"))
        .await
        .unwrap();

    svc.reject(event.id, "Incomplete description").await.unwrap();
    let approved = svc.approve(event.id).await.unwrap();

    assert_eq!(approved.status(), Some(EventStatus::WaitingLumaEdit));
    assert!(approved.rejected_at.is_none());
    assert!(approved.rejection_reason.is_none());
    assert!(approved.approved_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn publish_requires_waiting_luma_edit(pool: PgPool) {
    let svc = service(&pool, FakeProvider::new());
    let event = EventRepo::create(&pool, &sample_submission("Rust Santiago"))
        .await
        .unwrap();

    let err = svc.publish(event.id).await.unwrap_err();
    assert_matches!(err, LifecycleError::Core(CoreError::Conflict(_)));

    let unchanged = EventRepo::find_by_id(&pool, event.id).await.unwrap().unwrap();
    assert_eq!(unchanged.status(), Some(EventStatus::Submitted));
    assert!(unchanged.published_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn publish_flips_visibility_and_notifies(pool: PgPool) {
    let svc = service(&pool, FakeProvider::new());
    let event = EventRepo::create(&pool, &sample_submission("Rust Santiago"))
        .await
        .unwrap();

    svc.approve(event.id).await.unwrap();
    let published = svc.publish(event.id).await.unwrap();

    assert_eq!(published.status(), Some(EventStatus::Published));
    assert!(published.published_at.is_some());

    let emails = EmailRepo::list_by_template(&pool, templates::TEMPLATE_PUBLISHED)
        .await
        .unwrap();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].recipient, event.organizer_email);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn publish_aborts_when_visibility_update_fails(pool: PgPool) {
    let provider = FakeProvider::new();
    let svc = service(&pool, provider.clone());
    let event = EventRepo::create(&pool, &sample_submission("Rust Santiago"))
        .await
        .unwrap();

    svc.approve(event.id).await.unwrap();
    provider.fail_visibility.store(true, Ordering::SeqCst);

    let err = svc.publish(event.id).await.unwrap_err();
    assert_matches!(err, LifecycleError::Provider(LumaError::Api { status: 500, .. }));

    // Provider failure is a precondition failure: no local state moved.
    let unchanged = EventRepo::find_by_id(&pool, event.id).await.unwrap().unwrap();
    assert_eq!(unchanged.status(), Some(EventStatus::WaitingLumaEdit));
    assert!(unchanged.published_at.is_none());

    let emails = EmailRepo::list_by_template(&pool, templates::TEMPLATE_PUBLISHED)
        .await
        .unwrap();
    assert!(emails.is_empty());

    // Once the provider recovers the same publish succeeds.
    provider.fail_visibility.store(false, Ordering::SeqCst);
    let published = svc.publish(event.id).await.unwrap();
    assert_eq!(published.status(), Some(EventStatus::Published));
}
