/// コマンド実行結果を表す型
///
/// 各コマンドはこの型を返し、プレゼンテーション層で
/// 人間向けと機械向けの出力フォーマットを決定する。
use crate::domain::form::SubmitStatus;
use serde::Serialize;

/// コマンド実行結果の統一型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandResult {
    Upload(UploadResult),
    Check(CheckResult),
    Form(FormResult),
    Help,
}

/// アップロードコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct UploadResult {
    pub file_name: String,
    /// ファイルサイズ（bytes）
    pub file_size: u64,
    /// サーバーが返した JSON（中身は検査しない）
    pub response: serde_json::Value,
}

/// 検証コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub file_name: String,
    pub file_size: u64,
    /// 送信可能か
    pub valid: bool,
    /// バリデーションエラーの文言
    pub error: Option<String>,
}

/// 対話フォームの結果
#[derive(Debug, Clone, Serialize)]
pub struct FormResult {
    pub uploads_succeeded: usize,
    pub uploads_failed: usize,
    /// 終了時点の送信状態
    pub last_status: SubmitStatus,
}

impl CommandResult {
    /// 成功メッセージを取得（人間向け出力用）
    pub fn success_message(&self) -> String {
        match self {
            CommandResult::Upload(r) => format!("Uploaded {}.", r.file_name),
            CommandResult::Check(r) => {
                if r.valid {
                    format!("{} is ready to upload.", r.file_name)
                } else {
                    format!("{} cannot be uploaded.", r.file_name)
                }
            }
            CommandResult::Form(r) => format!(
                "Session ended: {} succeeded, {} failed.",
                r.uploads_succeeded, r.uploads_failed
            ),
            CommandResult::Help => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_message() {
        let result = CommandResult::Check(CheckResult {
            file_name: "movie.mov".to_string(),
            file_size: 7_000_000,
            valid: false,
            error: Some("File size cannot exceed 50Mb.".to_string()),
        });
        assert_eq!(result.success_message(), "movie.mov cannot be uploaded.");
    }

    #[test]
    fn test_serialize_is_tagged_by_command() {
        let result = CommandResult::Upload(UploadResult {
            file_name: "report.pdf".to_string(),
            file_size: 6_000_000,
            response: serde_json::json!({ "ok": true }),
        });
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["command"], "upload");
        assert_eq!(value["file_name"], "report.pdf");
        assert_eq!(value["response"]["ok"], true);
    }
}
