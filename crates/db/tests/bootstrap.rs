use sqlx::PgPool;
use techweek_core::lifecycle::EventStatus;
use techweek_db::models::email::EmailStatus;

/// Full bootstrap test: connect, migrate, verify seeded lookup tables.
#[sqlx::test(migrations = "../../db/migrations")]
async fn full_bootstrap(pool: PgPool) {
    techweek_db::health_check(&pool).await.unwrap();

    let statuses: Vec<(i16, String)> =
        sqlx::query_as("SELECT id, name FROM event_statuses ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(
        statuses,
        vec![
            (1, "submitted".to_string()),
            (2, "rejected".to_string()),
            (3, "waiting-luma-edit".to_string()),
            (4, "published".to_string()),
            (5, "deleted".to_string()),
        ]
    );

    let email_statuses: Vec<(i16, String)> =
        sqlx::query_as("SELECT id, name FROM email_statuses ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(
        email_statuses,
        vec![
            (1, "queued".to_string()),
            (2, "sent".to_string()),
            (3, "failed".to_string()),
        ]
    );
}

/// The Rust enums and the seed rows must agree on IDs; the repositories
/// bind the enum discriminants directly into queries.
#[sqlx::test(migrations = "../../db/migrations")]
async fn enum_ids_match_seed_rows(pool: PgPool) {
    for status in [
        EventStatus::Submitted,
        EventStatus::Rejected,
        EventStatus::WaitingLumaEdit,
        EventStatus::Published,
        EventStatus::Deleted,
    ] {
        let name: (String,) = sqlx::query_as("SELECT name FROM event_statuses WHERE id = $1")
            .bind(status.id())
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(name.0, status.as_str());
    }

    for status in [EmailStatus::Queued, EmailStatus::Sent, EmailStatus::Failed] {
        let exists: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM email_statuses WHERE id = $1")
                .bind(status.id())
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(exists.0, 1);
    }
}
