use clap::Parser;
use dotenvy::dotenv;
use record_file_augmenter::AugmentJob;
use record_file_augmenter::config::JobConfig;
use record_file_augmenter::infrastructure::{load_aws_config, records, storage};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Append a record's text to its file and store the result", long_about = None)]
struct Args {
    /// Record id (partition key value)
    id: String,

    /// DynamoDB table holding the record
    table_name: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "record_file_augmenter=info,augment=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = JobConfig::from_env();
    info!(
        "🚀 Starting augment job [Region: {}, Work dir: {}]",
        config.region,
        config.work_dir.display()
    );

    let aws_config = load_aws_config(&config).await;
    let record_store = records::setup_record_store(&config, &aws_config).await;
    let object_storage = storage::setup_storage(&config, &aws_config).await;

    let job = AugmentJob::new(record_store, object_storage, config.work_dir.clone());
    job.run(&args.id, &args.table_name).await;

    Ok(())
}
