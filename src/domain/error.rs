/// ドメイン層のエラー定義
///
/// ファイル選択とバリデーションで起きる制約違反を表現する。
/// 外部クレートのエラーは含まない。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// ファイルが選択されていない
    #[error("Please select a file to upload.")]
    FileRequired,

    /// ファイルサイズが上限を超過
    ///
    /// 表示文言はフォームのアラートにそのまま出すため固定。
    #[error("File size cannot exceed 50Mb.")]
    FileTooLarge { size: u64, max: u64 },

    /// 送信中に再度送信しようとした
    #[error("an upload is already in progress")]
    SubmissionInProgress,

    /// 指定されたパスが存在しない
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// ディレクトリが指定された
    #[error("'{path}' is a directory, not a file")]
    NotAFile { path: String },
}

impl DomainError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn not_a_file(path: impl Into<String>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::UserError
    }

    /// ユーザー向けのヒントメッセージを返す
    ///
    /// FileTooLarge のアラート文言は固定なので、実際のサイズと上限はここで示す。
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::FileRequired => Some("Pass a file path, e.g. 'upform upload report.pdf'.".into()),
            Self::FileTooLarge { size, max } => Some(format!(
                "The file is {} bytes; the limit is {} bytes. Choose a smaller file.",
                size, max
            )),
            Self::SubmissionInProgress => None,
            Self::FileNotFound { .. } => {
                Some("Please check the file path and ensure the file exists.".into())
            }
            Self::NotAFile { .. } => Some("Please specify a file, not a directory.".into()),
        }
    }
}
