/// 送信先サーバーとの通信モジュール
///
/// - `client`: reqwest による multipart 送信
/// - `error`: インフラ層のエラー
pub mod client;
pub mod error;

use crate::domain::form::UploadRequest;
use error::InfraError;

/// ファイルを 1 回送信する
///
/// 送信処理（commands::upload::submit）はこのトレイト越しに通信するため、
/// テストでは任意の実装に差し替えられる。
pub trait Uploader {
    /// リクエストを送信し、レスポンスの JSON をそのまま返す
    async fn upload(&self, request: &UploadRequest) -> Result<serde_json::Value, InfraError>;
}
