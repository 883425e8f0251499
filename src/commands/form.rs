/// 対話フォームコマンド
///
/// 端末上でアップロードフォームを操作します。
/// パスを入力するとファイルを選択（差し替え）し、空行で送信します。
/// 送信に失敗してもファイルは選択されたままなので、空行でそのまま再送信できます。
use crate::api::Uploader;
use crate::api::client::UploadClient;
use crate::api::error::InfraError;
use crate::commands::result::{CommandResult, FormResult};
use crate::commands::upload;
use crate::domain::file::SelectedFile;
use crate::domain::form::FormState;
use crate::presentation::input::{self, FormInput};
use crate::presentation::view::FormView;
use anyhow::{Context, Result};
use std::io::{self, BufRead};
use tracing::debug;

const INTRO: &str = "Enter a file path to choose a file, an empty line to submit,
'clear' to reset the form, or 'q' to quit.";

pub async fn execute(endpoint: &str) -> Result<CommandResult> {
    let client = UploadClient::new(endpoint).context("Failed to create upload client")?;
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    run_session(&mut reader, &client).await
}

/// 入力が尽きるか終了指示があるまでフォームを操作する
pub async fn run_session<R, U>(reader: &mut R, uploader: &U) -> Result<CommandResult>
where
    R: BufRead,
    U: Uploader,
{
    let mut form = FormState::new();
    let mut uploads_succeeded = 0;
    let mut uploads_failed = 0;

    eprintln!("{}", INTRO);

    loop {
        eprintln!("\n{}", FormView::from(&form));

        let Some(line) = input::read_line(reader, "> ")? else {
            break;
        };

        match FormInput::parse(&line) {
            FormInput::Quit => break,
            FormInput::Clear => form.clear_selection(),
            FormInput::Pick(path) => match SelectedFile::from_path(&path) {
                Ok(file) => form.select_file(file),
                Err(e) => eprintln!("✗ {}", e),
            },
            FormInput::Submit => {
                if form.is_submit_disabled() && form.selected_file().is_some() {
                    eprintln!("Submit is disabled. Choose a different file.");
                    continue;
                }

                match upload::submit(&mut form, uploader).await {
                    Ok(_) => {
                        uploads_succeeded += 1;
                        eprintln!("✓ Upload complete.");
                    }
                    Err(e) => match e.downcast_ref::<InfraError>() {
                        Some(infra) => {
                            uploads_failed += 1;
                            eprintln!("✗ {:#}", e);
                            if matches!(infra, InfraError::FileChanged { .. }) {
                                eprintln!("  Pick the file again to re-validate it.");
                            } else {
                                eprintln!("  Press Enter to retry with the same file.");
                            }
                        }
                        // バリデーションエラーはフォームのアラートとして表示される
                        None => debug!(error = %e, "Submit rejected"),
                    },
                }
            }
        }
    }

    Ok(CommandResult::Form(FormResult {
        uploads_succeeded,
        uploads_failed,
        last_status: form.status(),
    }))
}
