//! Integration tests for the durable-first email queue.

use sqlx::PgPool;
use techweek_db::models::email::{CreateEmail, EmailStatus};
use techweek_db::repositories::EmailRepo;
use techweek_notify::{EmailConfig, EmailQueue, Mailer, DELIVERY_SUPPRESSED};

fn sample_email() -> CreateEmail {
    CreateEmail {
        template: "event-ready-to-edit".to_string(),
        recipient: "ana@example.com".to_string(),
        subject: "Your event was approved".to_string(),
        body: "Hi Ana,\n\nGood news.".to_string(),
        data: serde_json::json!({ "luma_url": "https://lu.ma/evt-1" }),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn suppressed_delivery_marks_sent_with_marker(pool: PgPool) {
    let queue = EmailQueue::new(pool.clone(), None);

    let sent = queue.send(sample_email()).await.unwrap();

    assert_eq!(sent.status_id, EmailStatus::Sent.id());
    assert_eq!(sent.delivery_note.as_deref(), Some(DELIVERY_SUPPRESSED));
    assert!(sent.sent_at.is_some());
    assert!(sent.error.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_delivery_keeps_the_row_with_a_reason(pool: PgPool) {
    // Nothing listens on this port, so the SMTP handoff fails.
    let mailer = Mailer::new(EmailConfig {
        smtp_host: "127.0.0.1".to_string(),
        smtp_port: 1,
        from_address: "hola@techweek.cl".to_string(),
        smtp_user: None,
        smtp_password: None,
    });
    let queue = EmailQueue::new(pool.clone(), Some(mailer));

    // Delivery failure is recorded, not raised.
    let failed = queue.send(sample_email()).await.unwrap();

    assert_eq!(failed.status_id, EmailStatus::Failed.id());
    assert!(failed.error.is_some());
    assert!(failed.sent_at.is_none());

    // The durable row is queryable by template and recipient.
    let by_template = EmailRepo::list_by_template(&pool, "event-ready-to-edit")
        .await
        .unwrap();
    assert_eq!(by_template.len(), 1);
    let by_recipient = EmailRepo::list_for_recipient(&pool, "ana@example.com")
        .await
        .unwrap();
    assert_eq!(by_recipient[0].id, failed.id);
}
