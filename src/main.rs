mod api;
mod cli;
mod commands;
mod config;
mod domain;
mod error_severity;
mod logging;
mod presentation;

use anyhow::Result;
use api::error::InfraError;
use config::error::ConfigError;
use domain::error::DomainError;
use error_severity::ErrorSeverity;
use presentation::output;
use std::env;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let machine = cli::has_machine_flag(&args);

    if let Err(e) = run(&args).await {
        handle_error(e, machine);
    }
}

/// アプリケーションのメイン処理
async fn run(args: &[String]) -> Result<()> {
    let cli_args = cli::parse_args(args)?;

    let Some(command) = &cli_args.command else {
        output::print_usage();
        return Ok(());
    };

    let result = cli::dispatch(command, cli_args.endpoint.as_deref()).await?;
    output::output_result(&result, cli_args.machine)
}

/// エラーハンドリングとユーザーへの表示
///
/// anyhow::Error から元のエラー型を downcast して、
/// エラーの種類に応じた exit code とメッセージを決定する。
fn handle_error(error: anyhow::Error, machine: bool) {
    let severity = determine_severity(&error);
    let hint = get_error_hint(&error);

    if machine {
        output::output_error_machine(&error, severity, hint.as_deref());
    } else {
        eprintln!("Error: {}", error);

        let chain: Vec<_> = error.chain().skip(1).collect();
        if !chain.is_empty() {
            eprintln!("\nCaused by:");
            for (i, cause) in chain.iter().enumerate() {
                eprintln!("  {}: {}", i + 1, cause);
            }
        }

        if let Some(hint) = hint {
            eprintln!("\nHint: {}", hint);
        }
    }

    std::process::exit(severity.map_or(1, ErrorSeverity::exit_code));
}

/// エラーチェーンから深刻度を決定
///
/// 不明なエラー（引数の誤りなど）は None となり、終了コード 1 になる。
fn determine_severity(error: &anyhow::Error) -> Option<ErrorSeverity> {
    error.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<DomainError>() {
            Some(e.severity())
        } else if let Some(e) = cause.downcast_ref::<InfraError>() {
            Some(e.severity())
        } else {
            cause.downcast_ref::<ConfigError>().map(ConfigError::severity)
        }
    })
}

/// エラーに対するユーザー向けヒントを取得
fn get_error_hint(error: &anyhow::Error) -> Option<String> {
    error.chain().find_map(|cause| {
        if let Some(e) = cause.downcast_ref::<DomainError>() {
            e.hint()
        } else if let Some(e) = cause.downcast_ref::<InfraError>() {
            Some(e.hint().to_string())
        } else {
            cause
                .downcast_ref::<ConfigError>()
                .and_then(ConfigError::hint)
                .map(String::from)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_severity_through_context_chain() {
        let err = Err::<(), _>(DomainError::FileRequired)
            .context("Upload command failed")
            .unwrap_err();
        assert_eq!(determine_severity(&err), Some(ErrorSeverity::UserError));

        let err = Err::<(), _>(InfraError::network("refused"))
            .context("Upload command failed")
            .unwrap_err();
        assert_eq!(determine_severity(&err).map(ErrorSeverity::exit_code), Some(3));
        assert!(get_error_hint(&err).unwrap().contains("retry"));
    }

    #[test]
    fn test_too_large_hint_carries_sizes() {
        let err = Err::<(), _>(DomainError::FileTooLarge {
            size: 7_000_000,
            max: 6_250_000,
        })
        .context("Validation failed")
        .unwrap_err();
        let hint = get_error_hint(&err).unwrap();
        assert!(hint.contains("7000000"));
        assert!(hint.contains("6250000"));
    }

    #[test]
    fn test_changed_file_hint_asks_for_reselection() {
        let err = Err::<(), _>(InfraError::FileChanged {
            file_name: "report.pdf".to_string(),
            expected: 100,
            actual: 6_250_001,
        })
        .context("Failed to upload report.pdf")
        .unwrap_err();
        assert_eq!(determine_severity(&err), Some(ErrorSeverity::UserError));
        assert!(get_error_hint(&err).unwrap().contains("Select it again"));
    }

    #[test]
    fn test_unknown_error_has_no_severity() {
        let err = anyhow::anyhow!("Unknown command: 'x'");
        assert_eq!(determine_severity(&err), None);
        assert_eq!(get_error_hint(&err), None);
    }
}
