//! DocReminder dispatch service - main entry point.

use anyhow::Result;
use docreminder::client::{AsyncStoreClient, AsyncStoreClientImpl};
use docreminder::repositories::{
    EmailResolver, ExpiringDocuments, Mailer, ResendMailer, SupabaseDocumentRepository,
    SupabaseEmailResolver,
};
use docreminder::server::{build_router, run_server, AppState};
use docreminder::{Config, ReminderDispatcher, ResendClient, StoreClient};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded, store URL: {}", config.supabase_url);

    // Store client shared by the document query and the email RPC
    let store = StoreClient::new(&config);
    let client = Arc::new(AsyncStoreClientImpl::new(store)) as Arc<dyn AsyncStoreClient>;

    let documents =
        Arc::new(SupabaseDocumentRepository::new(client.clone())) as Arc<dyn ExpiringDocuments>;
    let resolver = Arc::new(SupabaseEmailResolver::new(client)) as Arc<dyn EmailResolver>;

    // Missing credentials are deliberately not fatal here: each run reports
    // the configuration error through the trigger response instead
    let mailer: Option<Arc<dyn Mailer>> = match &config.resend_api_key {
        Some(key) => Some(Arc::new(ResendMailer::new(ResendClient::new(
            key.clone(),
            config.request_timeout,
        )))),
        None => {
            warn!("RESEND_API_KEY is not set; dispatch runs will fail until it is configured");
            None
        }
    };

    let dispatcher = ReminderDispatcher::new(
        documents,
        resolver,
        mailer,
        config.app_url.clone(),
        config.mail_from.clone(),
        config.send_concurrency,
    );

    info!(
        "Dispatcher initialized (send concurrency: {})",
        config.send_concurrency
    );

    let state = Arc::new(AppState::new(dispatcher));
    let router = build_router(state);

    if let Err(e) = run_server(&config.bind_addr, router).await {
        error!("Server exited with error: {}", e);
        return Err(e);
    }

    Ok(())
}
