use std::io;
/// インフラ層のエラー定義
///
/// 送信先サーバーやファイルシステムとのやり取りで発生するエラー。
/// 一時的な障害と恒久的な障害は区別しない（どれも手動で再送信する）。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    /// ネットワークエラー
    #[error("network error: {message}")]
    Network { message: String },

    /// サーバーが 2xx 以外を返した
    #[error("server error: {endpoint} returned {status_code} - {message}")]
    Api {
        endpoint: String,
        message: String,
        status_code: u16,
    },

    /// レスポンスが JSON ではなかった
    #[error("invalid response from {endpoint}")]
    InvalidResponse {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// 選択後にファイルの中身が変わった（検証済みのサイズと一致しない）
    #[error("file changed since it was selected: {file_name} (validated {expected} bytes, found {actual})")]
    FileChanged {
        file_name: String,
        expected: u64,
        actual: u64,
    },

    /// 送信するファイルの読み込みに失敗
    #[error("failed to read file for upload")]
    Io(#[from] io::Error),
}

impl InfraError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn api(endpoint: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self::Api {
            endpoint: endpoint.into(),
            message: message.into(),
            status_code,
        }
    }

    /// エラーの深刻度を返す
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FileChanged { .. } => ErrorSeverity::UserError,
            _ => ErrorSeverity::SystemError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> &'static str {
        match self {
            Self::FileChanged { .. } => {
                "The file was modified after it was selected. Select it again to re-validate."
            }
            _ => "The file is still selected. Run the same command again to retry.",
        }
    }
}
