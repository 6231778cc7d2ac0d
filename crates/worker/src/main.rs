use std::sync::Arc;
use std::time::Duration;

use techweek_lifecycle::Reconciler;
use techweek_luma::LumaClient;
use techweek_notify::{EmailConfig, EmailQueue, Mailer};
use techweek_worker::JobRunner;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default cadence of the Luma reconciliation job.
const DEFAULT_SYNC_SCHEDULE: &str = "every 30m";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "techweek_worker=debug,techweek_lifecycle=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = techweek_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    techweek_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database connection established");

    let api_key = std::env::var("LUMA_API_KEY").expect("LUMA_API_KEY must be set");
    let provider = Arc::new(LumaClient::new(api_key));

    let mailer = EmailConfig::from_env().map(Mailer::new);
    if mailer.is_none() {
        tracing::warn!("SMTP not configured; email delivery is suppressed");
    }
    let emails = EmailQueue::new(pool.clone(), mailer);

    let reconciler = Reconciler::new(pool.clone(), provider, emails);

    let sync_schedule =
        std::env::var("LUMA_SYNC_SCHEDULE").unwrap_or_else(|_| DEFAULT_SYNC_SCHEDULE.to_string());

    let runner = JobRunner::new(pool)
        .register("luma-sync", &sync_schedule, move || {
            let reconciler = reconciler.clone();
            async move {
                reconciler.run().await?;
                Ok(())
            }
        })
        .expect("Invalid LUMA_SYNC_SCHEDULE expression");

    let cancel = CancellationToken::new();
    let runner_handle = tokio::spawn(runner.run(cancel.clone()));

    shutdown_signal().await;

    cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(5), runner_handle).await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or SIGTERM (on Unix) so the runner stops cleanly
/// whether interrupted interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
