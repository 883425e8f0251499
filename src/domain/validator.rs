/// ドメインサービス: 送信前バリデーション
///
/// 選択の有無とサイズ上限だけを見る。上限は APP_CONFIG から取得する。
use crate::config::APP_CONFIG;
use crate::domain::error::DomainError;
use crate::domain::file::SelectedFile;

/// 選択中のファイルを検証する
///
/// # エラー
/// - ファイルが選択されていない
/// - ファイルサイズが上限を超過
pub fn validate_selection(selected: Option<&SelectedFile>) -> Result<(), DomainError> {
    let file = selected.ok_or(DomainError::FileRequired)?;

    let max = APP_CONFIG.upload.max_file_size;
    if file.size > max {
        return Err(DomainError::FileTooLarge {
            size: file.size,
            max,
        });
    }

    Ok(())
}
