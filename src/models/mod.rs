use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::paths::derive_output_key;

/// Partition key attribute of the records table.
pub const ID_ATTRIBUTE: &str = "id";
pub const INPUT_TEXT_ATTRIBUTE: &str = "input_text";
pub const INPUT_FILE_PATH_ATTRIBUTE: &str = "input_file_path";
pub const OUTPUT_FILE_PATH_ATTRIBUTE: &str = "output_file_path";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub input_text: Option<String>,
    pub input_file_path: Option<String>,
    pub output_file_path: Option<String>,
}

impl Record {
    pub fn new(id: impl Into<String>, input_text: &str, input_file_path: &str) -> Self {
        Self {
            id: id.into(),
            input_text: Some(input_text.to_string()),
            input_file_path: Some(input_file_path.to_string()),
            output_file_path: None,
        }
    }

    /// Returns `(input_text, input_file_path)` when both are present and
    /// non-empty. An empty string counts as missing.
    pub fn job_inputs(&self) -> Option<(&str, &str)> {
        let text = self.input_text.as_deref().filter(|t| !t.is_empty())?;
        let path = self.input_file_path.as_deref().filter(|p| !p.is_empty())?;
        Some((text, path))
    }
}

/// A `container/key` reference to a remote object. The key may contain `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocator {
    pub container: String,
    pub key: String,
}

impl FileLocator {
    pub fn new(container: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            key: key.into(),
        }
    }

    /// Splits on the first `/`. A locator without `/` yields an empty key;
    /// nothing here rejects empty parts.
    pub fn parse(locator: &str) -> Self {
        match locator.split_once('/') {
            Some((container, key)) => Self::new(container, key),
            None => Self::new(locator, ""),
        }
    }

    /// Same container, key rewritten to `<stem>_output<ext>`.
    pub fn output_locator(&self) -> Self {
        Self::new(self.container.clone(), derive_output_key(&self.key))
    }
}

impl fmt::Display for FileLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.container, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_key() {
        let loc = FileLocator::parse("bucket1/dir/in.txt");
        assert_eq!(loc.container, "bucket1");
        assert_eq!(loc.key, "dir/in.txt");
    }

    #[test]
    fn test_parse_without_separator() {
        let loc = FileLocator::parse("bucket-only");
        assert_eq!(loc.container, "bucket-only");
        assert_eq!(loc.key, "");
    }

    #[test]
    fn test_parse_keeps_empty_segments() {
        let loc = FileLocator::parse("b//x/");
        assert_eq!(loc.container, "b");
        assert_eq!(loc.key, "/x/");
        assert_eq!(loc.to_string(), "b//x/");
    }

    #[test]
    fn test_output_locator() {
        let loc = FileLocator::parse("bucket1/dir/in.txt").output_locator();
        assert_eq!(loc.to_string(), "bucket1/dir/in_output.txt");

        let loc = FileLocator::parse("a/b/file").output_locator();
        assert_eq!(loc.to_string(), "a/b/file_output");
    }

    #[test]
    fn test_job_inputs_requires_both_fields() {
        let record = Record::new("42", "hello", "bucket1/in.txt");
        assert_eq!(record.job_inputs(), Some(("hello", "bucket1/in.txt")));

        let empty_text = Record::new("42", "", "bucket1/in.txt");
        assert_eq!(empty_text.job_inputs(), None);

        let missing_path = Record {
            input_file_path: None,
            ..Record::new("42", "hello", "")
        };
        assert_eq!(missing_path.job_inputs(), None);
    }
}
