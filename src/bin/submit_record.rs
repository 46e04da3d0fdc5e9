use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use record_file_augmenter::Record;
use record_file_augmenter::config::JobConfig;
use record_file_augmenter::infrastructure::{load_aws_config, records};
use record_file_augmenter::services::records::RecordStore;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Creates a record for the augment job to pick up.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// DynamoDB table to write to
    table_name: String,

    /// Text that the job appends to the file
    input_text: String,

    /// Source file as `<bucket>/<key>`
    input_file_path: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "submit_record=info,record_file_augmenter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = JobConfig::from_env();
    let aws_config = load_aws_config(&config).await;
    let store = records::setup_record_store(&config, &aws_config).await;

    let record = Record::new(
        Uuid::new_v4().to_string(),
        &args.input_text,
        &args.input_file_path,
    );

    info!("📝 Submitting record {} to table {}", record.id, args.table_name);
    if let Err(e) = store.put_record(&args.table_name, &record).await {
        error!("❌ Failed to submit record: {}", e);
        return Err(e).context("put_record failed");
    }

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
