mod config;
mod handler;
mod notify;
mod record;
mod storage;

use aws_config::BehaviorVersion;
use lambda_runtime::{run, service_fn, Error};

use crate::config::Config;
use crate::notify::Notifier;
use crate::storage::ObjectStore;

/// ハンドラ間で共有する状態
pub struct AppContext {
    pub config: Config,
    pub store: ObjectStore,
    pub notifier: Notifier,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_target(false)
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        destination_bucket = %config.destination_bucket,
        scale = config.params.scale,
        quality = config.params.quality,
        "configuration loaded"
    );

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = ObjectStore::new(aws_sdk_s3::Client::new(&aws_config));
    let notifier = Notifier::new(aws_sdk_sns::Client::new(&aws_config), config.topic_arn.clone());

    let ctx = AppContext {
        config,
        store,
        notifier,
    };

    run(service_fn(|event| handler::function_handler(event, &ctx))).await
}
