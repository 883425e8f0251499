/// ドメイン層: アップロードフォームの状態
///
/// フォームは「選択中のファイル」「バリデーションエラー」「送信状態」の
/// 3 つだけを持ち、すべての変更は下の遷移メソッドを通して行う。
///
/// # 状態遷移
/// ```text
/// Idle ──begin_submit──▶ Submitting ──finish_submit──▶ Done(Succeeded | Failed)
///  ▲                                                        │
///  └──────────────────────── select_file ───────────────────┘
/// ```
/// `Done` は送信ボタンの制御上 `Idle` と同じ扱い。
use crate::config::APP_CONFIG;
use crate::domain::error::DomainError;
use crate::domain::file::SelectedFile;
use crate::domain::validator;
use serde::Serialize;
use std::path::PathBuf;

/// 送信結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Succeeded,
    Failed,
}

impl SubmitOutcome {
    /// ログに出すメッセージ
    pub fn log_message(self) -> &'static str {
        match self {
            Self::Succeeded => "File received. It will be processed shortly.",
            Self::Failed => "Error uploading file. Please try again.",
        }
    }
}

/// 送信状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", content = "outcome", rename_all = "snake_case")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Done(SubmitOutcome),
}

/// 送信 1 回分のリクエスト内容
///
/// ファイルの中身はここでは持たず、送信直前に読み込む。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// multipart のフィールド名（常に "file"）
    pub field_name: &'static str,
    pub file_name: String,
    pub size: u64,
    pub path: PathBuf,
}

impl From<&SelectedFile> for UploadRequest {
    fn from(file: &SelectedFile) -> Self {
        Self {
            field_name: APP_CONFIG.upload.field_name,
            file_name: file.name.clone(),
            size: file.size,
            path: file.path.clone(),
        }
    }
}

/// フォーム状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    selected_file: Option<SelectedFile>,
    error: Option<String>,
    status: SubmitStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    /// 表示中のバリデーションエラー
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// 送信ボタンを無効にすべきか
    pub fn is_submit_disabled(&self) -> bool {
        self.is_submitting() || self.error.is_some()
    }

    /// ファイルを選択（または差し替え）する
    ///
    /// 選択のたびに検証し直すので、同じファイルを 2 回選んでも状態は変わらない。
    /// 送信中は何もしない。
    pub fn select_file(&mut self, file: SelectedFile) {
        if self.is_submitting() {
            return;
        }
        self.error = validator::validate_selection(Some(&file))
            .err()
            .map(|e| e.to_string());
        self.selected_file = Some(file);
        self.status = SubmitStatus::Idle;
    }

    /// 選択を解除して初期状態に戻す
    pub fn clear_selection(&mut self) {
        if self.is_submitting() {
            return;
        }
        *self = Self::default();
    }

    /// 送信を開始する
    ///
    /// 検証に失敗した場合はエラーメッセージを保持したまま拒否する。
    ///
    /// # エラー
    /// - 送信中
    /// - ファイル未選択
    /// - サイズ超過
    pub fn begin_submit(&mut self) -> Result<UploadRequest, DomainError> {
        if self.is_submitting() {
            return Err(DomainError::SubmissionInProgress);
        }

        if let Err(e) = validator::validate_selection(self.selected_file.as_ref()) {
            self.error = Some(e.to_string());
            return Err(e);
        }

        let file = self.selected_file.as_ref().ok_or(DomainError::FileRequired)?;
        let request = UploadRequest::from(file);
        self.error = None;
        self.status = SubmitStatus::Submitting;
        Ok(request)
    }

    /// 送信を完了する
    ///
    /// 成功時は選択を破棄し、失敗時は再送信できるよう選択を残す。
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        if outcome == SubmitOutcome::Succeeded {
            self.selected_file = None;
            self.error = None;
        }
        self.status = SubmitStatus::Done(outcome);
    }
}
