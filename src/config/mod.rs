use std::env;
use std::path::PathBuf;

/// Region used when `AWS_REGION` is not set.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Deployment settings for the augment job and its companion tools
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// AWS region for both DynamoDB and S3 (default: "us-east-1")
    pub region: String,

    /// Endpoint override for local stacks such as MinIO or LocalStack
    pub endpoint_url: Option<String>,

    /// Directory that local file paths are resolved against (default: ".")
    pub work_dir: PathBuf,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            work_dir: PathBuf::from("."),
        }
    }
}

impl JobConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            region: env::var("AWS_REGION")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(default.region),

            endpoint_url: env::var("AWS_ENDPOINT_URL")
                .ok()
                .filter(|v| !v.is_empty()),

            work_dir: env::var("AUGMENT_WORK_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(default.work_dir),
        }
    }
}
