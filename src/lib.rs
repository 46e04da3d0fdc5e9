pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

pub use crate::error::{AugmentError, Result};
pub use crate::models::{FileLocator, Record};
pub use crate::services::augment::{AugmentJob, RunOutcome, Step};
