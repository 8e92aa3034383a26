use std::path::{Path, PathBuf};

/// Suffix appended to the input stem to name the displaced model.
pub const CURVY_SUFFIX: &str = "_curvy";

/// File name without directory and without anything from its last `.` on.
///
/// `/data/model.bin` → `model`, `archive.tar.gz` → `archive.tar`, `README` → `README`.
/// A leading dot counts too: `/d/.bin` → `` (unlike [`Path::file_stem`]).
pub fn file_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rsplit_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name,
    }
}

/// Output path for a displaced model: `<stem>_curvy.bin`, relative to the
/// current directory.
pub fn curvy_output_path(input: &Path) -> PathBuf {
    PathBuf::from(format!("{}{CURVY_SUFFIX}.bin", file_stem(input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_directory_and_extension() {
        assert_eq!(file_stem(Path::new("/data/model.bin")), "model");
        assert_eq!(file_stem(Path::new("archive.tar.gz")), "archive.tar");
        assert_eq!(file_stem(Path::new("README")), "README");
        assert_eq!(file_stem(Path::new("")), "");
    }

    #[test]
    fn dot_file_has_empty_stem() {
        assert_eq!(file_stem(Path::new("/d/.bin")), "");
        assert_eq!(
            curvy_output_path(Path::new("/d/.bin")),
            PathBuf::from("_curvy.bin")
        );
    }

    #[test]
    fn output_lands_in_current_directory() {
        assert_eq!(
            curvy_output_path(Path::new("/data/model.bin")),
            PathBuf::from("model_curvy.bin")
        );
    }
}
