use crate::api::Uploader;
use crate::api::client::UploadClient;
use crate::commands::result::{CommandResult, UploadResult};
use crate::domain::file::SelectedFile;
use crate::domain::form::{FormState, SubmitOutcome};
use crate::presentation::view::FormView;
use anyhow::{Context, Result};
use tracing::{error, info};

/// アップロードコマンドを実行する
///
/// # 引数
/// * `file_path` - アップロード対象のファイルのパス
/// * `endpoint` - 送信先のベースURL
///
/// # エラー
/// このレイヤーでは anyhow::Result を返し、
/// ドメイン層・インフラ層のエラーを集約する。
pub async fn execute(file_path: &str, endpoint: &str) -> Result<CommandResult> {
    let file = SelectedFile::from_path(file_path).context("File selection failed")?;
    let (file_name, file_size) = (file.name.clone(), file.size);

    let mut form = FormState::new();
    form.select_file(file);
    eprintln!("{}\n", FormView::from(&form));

    let client = UploadClient::new(endpoint).context("Failed to create upload client")?;

    let response = submit(&mut form, &client)
        .await
        .with_context(|| format!("Failed to upload {}", file_name))?;

    Ok(CommandResult::Upload(UploadResult {
        file_name,
        file_size,
        response,
    }))
}

/// フォームの内容を 1 回だけ送信する
///
/// 検証に通らない場合は通信せずに DomainError を返す。
/// 通信の失敗は ERROR でログに出し、フォームには選択を残したまま
/// InfraError を返す（自動リトライはしない）。
pub async fn submit<U: Uploader>(form: &mut FormState, uploader: &U) -> Result<serde_json::Value> {
    let request = form.begin_submit()?;
    info!(file = %request.file_name, size = request.size, "Submitting upload");

    match uploader.upload(&request).await {
        Ok(response) => {
            form.finish_submit(SubmitOutcome::Succeeded);
            info!(response = %response, "{}", SubmitOutcome::Succeeded.log_message());
            Ok(response)
        }
        Err(e) => {
            form.finish_submit(SubmitOutcome::Failed);
            error!(error = %e, "{}", SubmitOutcome::Failed.log_message());
            Err(e.into())
        }
    }
}
