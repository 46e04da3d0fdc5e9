use std::path::{Path, PathBuf};

/// Splits `key` into `(stem, extension)` at the last `.` of its final
/// component. The extension keeps its dot. Leading dots of the final
/// component are part of the stem, so `dir/.env` has no extension.
pub fn split_extension(key: &str) -> (&str, &str) {
    let name_start = key.rfind('/').map(|i| i + 1).unwrap_or(0);
    let Some(dot) = key.rfind('.') else {
        return (key, "");
    };
    if dot < name_start {
        return (key, "");
    }
    if key[name_start..dot].bytes().all(|b| b == b'.') {
        return (key, "");
    }
    key.split_at(dot)
}

/// `dir/in.txt` becomes `dir/in_output.txt`; `dir/in` becomes `dir/in_output`.
pub fn derive_output_key(key: &str) -> String {
    let (stem, ext) = split_extension(key);
    format!("{}_output{}", stem, ext)
}

/// Local path for an object key: the key verbatim, under `work_dir`.
pub fn local_path_for_key(work_dir: &Path, key: &str) -> PathBuf {
    work_dir.join(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("file.txt"), ("file", ".txt"));
        assert_eq!(split_extension("dir/in.txt"), ("dir/in", ".txt"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("dir/file"), ("dir/file", ""));
        assert_eq!(split_extension(""), ("", ""));
    }

    #[test]
    fn test_split_extension_ignores_dots_in_directories() {
        assert_eq!(split_extension("v1.2/readme"), ("v1.2/readme", ""));
        assert_eq!(split_extension("v1.2/readme.md"), ("v1.2/readme", ".md"));
    }

    #[test]
    fn test_split_extension_leading_dots() {
        assert_eq!(split_extension(".env"), (".env", ""));
        assert_eq!(split_extension("dir/..."), ("dir/...", ""));
        assert_eq!(split_extension(".config.json"), (".config", ".json"));
        assert_eq!(split_extension("name."), ("name", "."));
    }

    #[test]
    fn test_derive_output_key() {
        assert_eq!(derive_output_key("file.txt"), "file_output.txt");
        assert_eq!(derive_output_key("b/file.txt"), "b/file_output.txt");
        assert_eq!(derive_output_key("b/file"), "b/file_output");
        assert_eq!(derive_output_key(""), "_output");
    }

    #[test]
    fn test_local_path_for_key() {
        let path = local_path_for_key(Path::new("/tmp/work"), "dir/in.txt");
        assert_eq!(path, PathBuf::from("/tmp/work/dir/in.txt"));
    }
}
