/// プレゼンテーション層: コマンド結果の出力
///
/// コマンド実行結果をユーザー向け（人間可読、stderr）または
/// 機械向け（JSON、stdout）形式で出力する。
/// CLI使用方法の表示もこのモジュールが担当する。
use crate::commands::result::CommandResult;
use crate::error_severity::ErrorSeverity;
use anyhow::Result;

/// ヘルプテキスト（単一の情報源）
pub const HELP_TEXT: &str = "upform
Upload a single file to a server as multipart/form-data

Usage:
  upform [--machine] [--endpoint <url>] <command> [args...]

Global Flags:
  --machine          - Output machine-readable JSON to stdout (for scripting)
  --endpoint <url>   - Base URL of the upload server (files are POSTed to <url>/upload)
                       Overrides 'endpoint' in config.toml

Available commands:
  upload <file>    - Validate and upload a file (max 6,250,000 bytes)
  check <file>     - Validate a file and show the form without uploading
  form             - Interactive form: enter a path to choose a file,
                     an empty line to submit, 'clear' to reset, 'q' to quit
  help             - Display this help message

Logging:
  RUST_LOG=debug upform upload <file>   - Override the configured log level";

/// コマンド使用方法を表示する
pub fn print_usage() {
    eprintln!("{}", HELP_TEXT);
}

/// コマンド結果を適切な形式で出力する
///
/// * `machine_output = false`: 人間向けメッセージ（stderr）
/// * `machine_output = true`: 機械可読JSON（stdout）
pub fn output_result(result: &CommandResult, machine_output: bool) -> Result<()> {
    if machine_output {
        println!("{}", machine_readable(result)?);
    } else {
        output_human_readable(result);
    }
    Ok(())
}

fn output_human_readable(result: &CommandResult) {
    match result {
        CommandResult::Upload(r) => {
            eprintln!("✓ {}", result.success_message());
            eprintln!("Size: {} bytes", r.file_size);
            eprintln!("Server response: {}", r.response);
        }
        CommandResult::Check(r) => {
            if r.valid {
                eprintln!("✓ {}", result.success_message());
            } else {
                eprintln!("✗ {}", result.success_message());
                if let Some(error) = &r.error {
                    eprintln!("  {}", error);
                }
            }
        }
        CommandResult::Form(_) => eprintln!("{}", result.success_message()),
        CommandResult::Help => eprintln!("{}", HELP_TEXT),
    }
}

/// 機械可読JSONを生成する
fn machine_readable(result: &CommandResult) -> Result<String> {
    let mut json = serde_json::to_value(result)?;
    if let Some(object) = json.as_object_mut() {
        object.insert("success".to_string(), serde_json::Value::Bool(true));
    }
    Ok(serde_json::to_string(&json)?)
}

/// エラーを機械可読JSONで出力する（stdout）
pub fn output_error_machine(error: &anyhow::Error, severity: Option<ErrorSeverity>, hint: Option<&str>) {
    let exit_code = severity.map_or(1, |s| s.exit_code());
    let json = serde_json::json!({
        "success": false,
        "error": format!("{:#}", error),
        "severity": severity,
        "exit_code": exit_code,
        "hint": hint,
    });
    println!("{}", json);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::result::{CheckResult, FormResult, UploadResult};
    use crate::domain::form::SubmitStatus;

    #[test]
    fn test_machine_readable_upload() {
        let result = CommandResult::Upload(UploadResult {
            file_name: "report.pdf".to_string(),
            file_size: 6_000_000,
            response: serde_json::json!({ "id": 1 }),
        });

        let json: serde_json::Value =
            serde_json::from_str(&machine_readable(&result).unwrap()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["command"], "upload");
        assert_eq!(json["file_size"], 6_000_000);
    }

    #[test]
    fn test_machine_readable_check_invalid() {
        let result = CommandResult::Check(CheckResult {
            file_name: "movie.mov".to_string(),
            file_size: 7_000_000,
            valid: false,
            error: Some("File size cannot exceed 50Mb.".to_string()),
        });

        let json: serde_json::Value =
            serde_json::from_str(&machine_readable(&result).unwrap()).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["error"], "File size cannot exceed 50Mb.");
    }

    #[test]
    fn test_machine_readable_form() {
        let result = CommandResult::Form(FormResult {
            uploads_succeeded: 1,
            uploads_failed: 2,
            last_status: SubmitStatus::Idle,
        });

        let json: serde_json::Value =
            serde_json::from_str(&machine_readable(&result).unwrap()).unwrap();
        assert_eq!(json["uploads_failed"], 2);
        assert_eq!(json["last_status"]["status"], "idle");
    }

    #[test]
    fn test_output_result_both_modes() {
        assert!(output_result(&CommandResult::Help, true).is_ok());
        assert!(output_result(&CommandResult::Help, false).is_ok());
    }
}
