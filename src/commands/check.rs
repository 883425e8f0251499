/// 検証コマンド
///
/// ファイルを選択してフォームの表示（ラベル・アラート・送信ボタン）を確認します。
/// 通信は行いません。
use crate::commands::result::{CheckResult, CommandResult};
use crate::domain::file::SelectedFile;
use crate::domain::form::FormState;
use crate::presentation::view::FormView;
use anyhow::{Context, Result};

pub fn execute(file_path: &str) -> Result<CommandResult> {
    let file = SelectedFile::from_path(file_path).context("File selection failed")?;
    let (file_name, file_size) = (file.name.clone(), file.size);

    let mut form = FormState::new();
    form.select_file(file);
    eprintln!("{}\n", FormView::from(&form));

    Ok(CommandResult::Check(CheckResult {
        file_name,
        file_size,
        valid: !form.is_submit_disabled(),
        error: form.error().map(String::from),
    }))
}
