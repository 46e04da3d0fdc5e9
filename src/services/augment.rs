use crate::error::Result;
use crate::models::FileLocator;
use crate::services::records::RecordStore;
use crate::services::storage::ObjectStorage;
use crate::utils::paths::local_path_for_key;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{error, info};

pub const INVALID_INPUT_MESSAGE: &str = "Invalid ID or data not found.";
pub const COMPLETED_MESSAGE: &str = "Process completed successfully.";

/// Pipeline steps whose failure is logged and skipped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Download,
    Append,
    Upload,
    UpdateRecord,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Download => "download",
            Step::Append => "append",
            Step::Upload => "upload",
            Step::UpdateRecord => "update-record",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The record was missing or lacked `input_text`/`input_file_path`.
    InvalidInput,
    /// Every step ran. `failed_steps` lists the ones that errored.
    Completed {
        output: FileLocator,
        failed_steps: Vec<Step>,
    },
}

/// Appends `text` to a record's file and writes the result back next to it.
pub struct AugmentJob {
    records: Arc<dyn RecordStore>,
    storage: Arc<dyn ObjectStorage>,
    work_dir: PathBuf,
}

impl AugmentJob {
    pub fn new(
        records: Arc<dyn RecordStore>,
        storage: Arc<dyn ObjectStorage>,
        work_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            records,
            storage,
            work_dir: work_dir.into(),
        }
    }

    /// Runs the pipeline for one record. Failures after the initial lookup
    /// never stop the run; they are logged and reported in the outcome.
    pub async fn run(&self, id: &str, table_name: &str) -> RunOutcome {
        info!("📄 Processing record {} from table {}", id, table_name);

        let record = match self.records.get_record(table_name, id).await {
            Ok(record) => record,
            Err(e) => {
                error!("Error getting item from DynamoDB: {}", e);
                None
            }
        };

        let Some((input_text, input_file_path)) = record.as_ref().and_then(|r| r.job_inputs())
        else {
            println!("{}", INVALID_INPUT_MESSAGE);
            return RunOutcome::InvalidInput;
        };

        let input = FileLocator::parse(input_file_path);
        let local_path = local_path_for_key(&self.work_dir, &input.key);
        let mut failed_steps = Vec::new();

        if let Err(e) = self
            .storage
            .download(&input.container, &input.key, &local_path)
            .await
        {
            error!("Error downloading file from S3: {}", e);
            failed_steps.push(Step::Download);
        }

        if let Err(e) = append_text(&local_path, input_text).await {
            error!("Error appending input text to file: {}", e);
            failed_steps.push(Step::Append);
        }

        let output = input.output_locator();

        if let Err(e) = self
            .storage
            .upload(&local_path, &output.container, &output.key)
            .await
        {
            error!("Error uploading file to S3: {}", e);
            failed_steps.push(Step::Upload);
        }

        if let Err(e) = self
            .records
            .set_output_file_path(table_name, id, &output.to_string())
            .await
        {
            error!("Error updating DynamoDB table: {}", e);
            failed_steps.push(Step::UpdateRecord);
        }

        if failed_steps.is_empty() {
            info!("✅ Record {} now points at {}", id, output);
        } else {
            let names: Vec<String> = failed_steps.iter().map(Step::to_string).collect();
            tracing::warn!("⚠️  Record {} finished with failed steps: {}", id, names.join(", "));
        }
        println!("{}", COMPLETED_MESSAGE);

        RunOutcome::Completed {
            output,
            failed_steps,
        }
    }
}

/// Appends a newline and `text`, creating the file if it does not exist.
pub async fn append_text(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(format!("\n{}", text).as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_text_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        tokio::fs::write(&path, "line one").await.unwrap();

        append_text(&path, "hello").await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "line one\nhello");
    }

    #[tokio::test]
    async fn test_append_text_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");

        append_text(&path, "hello").await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "\nhello");
    }

    #[tokio::test]
    async fn test_append_text_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("in.txt");

        assert!(append_text(&path, "hello").await.is_err());
    }

    #[test]
    fn test_step_display() {
        assert_eq!(Step::UpdateRecord.to_string(), "update-record");
        assert_eq!(Step::Download.to_string(), "download");
    }
}
