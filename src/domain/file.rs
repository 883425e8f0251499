/// ドメイン: 選択されたファイル
///
/// ブラウザのファイル入力に相当する。パスを受け取り、
/// 名前とサイズだけを保持する（中身は送信時に読み込む）。
use crate::domain::error::DomainError;
use std::path::{Path, PathBuf};

/// ユーザーが選んだ 1 つのファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// 元のファイル名（multipart の filename になる）
    pub name: String,
    /// サイズ（バイト）
    pub size: u64,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            size,
            path: path.into(),
        }
    }

    /// パスからファイルを選択する
    ///
    /// # エラー
    /// - パスが存在しない
    /// - ディレクトリが指定された
    pub fn from_path(file_path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = file_path.as_ref();
        let display = path.display().to_string();

        let metadata =
            std::fs::metadata(path).map_err(|_| DomainError::file_not_found(&display))?;

        if metadata.is_dir() {
            return Err(DomainError::not_a_file(display));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| display.clone());

        Ok(Self::new(name, metadata.len(), path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_path_reads_name_and_size() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("report.pdf");
        fs::write(&path, b"%PDF-1.7").expect("Failed to write test file");

        let file = SelectedFile::from_path(&path).expect("file should be selectable");
        assert_eq!(file.name, "report.pdf");
        assert_eq!(file.size, 8);
        assert_eq!(file.path, path);
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SelectedFile::from_path("/nonexistent/path/report.pdf");
        assert!(matches!(result, Err(DomainError::FileNotFound { .. })));
    }

    #[test]
    fn test_from_path_directory() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let result = SelectedFile::from_path(dir.path());
        assert!(matches!(result, Err(DomainError::NotAFile { .. })));
    }
}
