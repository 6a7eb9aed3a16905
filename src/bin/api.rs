use submission_notifier::api::handler;
use submission_notifier::core::config::AppConfig;
use submission_notifier::telegram::TelegramClient;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    submission_notifier::setup_logging();

    // Missing credentials are answered per request with a 500.
    let config = AppConfig::from_env()
        .inspect_err(|e| error!("Config error: {}", e))
        .ok();
    let client = TelegramClient::new();

    let config = config.as_ref();
    let client = &client;
    lambda_runtime::run(lambda_runtime::service_fn(move |event| async move {
        handler(event, config, client).await
    }))
    .await
}
