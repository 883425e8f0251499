/// HTTPクライアント
///
/// 選択されたファイルを multipart/form-data で送信する。
/// タイムアウトと自動リトライは持たない（失敗はそのまま呼び出し元へ返す）。
use crate::api::Uploader;
use crate::api::error::InfraError;
use crate::config::APP_CONFIG;
use crate::domain::form::UploadRequest;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// APIクライアントの結果型
type ApiResult<T> = Result<T, InfraError>;

/// アップロード用クライアント
pub struct UploadClient {
    client: Client,
    base_url: String,
}

impl UploadClient {
    /// 新しいクライアントを作成
    ///
    /// # Arguments
    /// * `base_url` - 送信先のベースURL（例: "http://localhost:3000"）
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| InfraError::network(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// アップロード先の完全なURL
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, APP_CONFIG.api.upload_path)
    }

    /// 1 パートだけの multipart フォームを組み立てる
    ///
    /// 読み込みは上限 + 1 バイトで打ち切る。読めたバイト数が検証済みのサイズと
    /// 異なる場合は送信しない。
    async fn build_form(request: &UploadRequest) -> ApiResult<Form> {
        let file = File::open(&request.path).await?;
        let mut bytes = Vec::new();
        file.take(APP_CONFIG.upload.max_file_size + 1)
            .read_to_end(&mut bytes)
            .await?;

        let actual = bytes.len() as u64;
        if actual != request.size {
            return Err(InfraError::FileChanged {
                file_name: request.file_name.clone(),
                expected: request.size,
                actual,
            });
        }

        let part = Part::bytes(bytes).file_name(request.file_name.clone());
        Ok(Form::new().part(request.field_name, part))
    }

    async fn send(&self, url: &str, form: Form) -> ApiResult<Response> {
        self.client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    InfraError::network(format!("Connection failed for POST {}: {}", url, e))
                } else {
                    InfraError::network(format!("Request failed for POST {}: {}", url, e))
                }
            })
    }

    /// レスポンスをチェックしてエラーを返す
    async fn check_response(response: Response, url: &str) -> ApiResult<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());

        Err(InfraError::api(url, error_body, status.as_u16()))
    }

    /// JSONレスポンスをデシリアライズ（形は検査しない）
    async fn parse_json(response: Response, url: &str) -> ApiResult<serde_json::Value> {
        response
            .json()
            .await
            .map_err(|source| InfraError::InvalidResponse {
                endpoint: url.to_string(),
                source,
            })
    }
}

impl Uploader for UploadClient {
    async fn upload(&self, request: &UploadRequest) -> ApiResult<serde_json::Value> {
        let url = self.upload_url();
        let form = Self::build_form(request).await?;

        debug!(url = %url, file = %request.file_name, size = request.size, "POST multipart");

        let response = self.send(&url, form).await?;
        let response = Self::check_response(response, &url).await?;
        Self::parse_json(response, &url).await
    }
}
