use crate::commands::{self, CommandResult};
use crate::config::UserConfig;
use crate::config::user::validate_endpoint;
use crate::logging;
use anyhow::{Context, Result, bail};

/// サブコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Upload { file_path: String },
    Check { file_path: String },
    Form,
    Help,
}

/// 解析済みのCLI引数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// --machine: 機械可読出力
    pub machine: bool,
    /// --endpoint: 送信先の上書き
    pub endpoint: Option<String>,
    /// None の場合は使用方法を表示する
    pub command: Option<Command>,
}

/// 引数に --machine が含まれるか
///
/// 引数の解析に失敗した場合でもエラー出力の形式を決めるために使う。
pub fn has_machine_flag(args: &[String]) -> bool {
    args.iter().skip(1).any(|a| a == "--machine")
}

/// CLI引数を解析する
///
/// グローバルフラグはコマンドより前に置く。
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut machine = false;
    let mut endpoint = None;
    let mut rest = args.iter().skip(1);

    let command = loop {
        let Some(arg) = rest.next() else {
            break None;
        };
        match arg.as_str() {
            "--machine" => machine = true,
            "--endpoint" => {
                let url = rest
                    .next()
                    .context("Please specify a URL after --endpoint")?;
                endpoint = Some(url.clone());
            }
            flag if flag.starts_with("--") => bail!("Unknown flag: '{}'", flag),
            command => break Some(command.to_string()),
        }
    };

    let command = match command.as_deref() {
        None => None,
        Some("upload") => Some(Command::Upload {
            file_path: rest
                .next()
                .context("Please specify a file path for upload command")?
                .clone(),
        }),
        Some("check") => Some(Command::Check {
            file_path: rest
                .next()
                .context("Please specify a file path for check command")?
                .clone(),
        }),
        Some("form") => Some(Command::Form),
        Some("help") => Some(Command::Help),
        Some(other) => bail!(
            "Unknown command: '{}'. Use 'help' to see available commands.",
            other
        ),
    };

    if let Some(extra) = rest.next() {
        bail!("Unexpected argument: '{}'", extra);
    }

    Ok(CliArgs {
        machine,
        endpoint,
        command,
    })
}

/// コマンドにディスパッチする
pub async fn dispatch(command: &Command, endpoint_flag: Option<&str>) -> Result<CommandResult> {
    if *command == Command::Help {
        return Ok(commands::help::execute());
    }

    let user_config = UserConfig::load()
        .context("Failed to load user configuration. Please check your config.toml file.")?;
    logging::init(user_config.log_level())?;

    let endpoint = resolve_endpoint(endpoint_flag, &user_config)?;

    match command {
        Command::Upload { file_path } => commands::upload::execute(file_path, &endpoint)
            .await
            .context("Upload command failed"),
        Command::Check { file_path } => {
            commands::check::execute(file_path).context("Check command failed")
        }
        Command::Form => commands::form::execute(&endpoint)
            .await
            .context("Form command failed"),
        Command::Help => Ok(commands::help::execute()),
    }
}

/// 送信先を決める（--endpoint > config.toml > 既定値）
fn resolve_endpoint(flag: Option<&str>, user_config: &UserConfig) -> Result<String> {
    match flag {
        Some(url) => {
            validate_endpoint(url)?;
            Ok(url.to_string())
        }
        None => Ok(user_config.endpoint().to_string()),
    }
}
