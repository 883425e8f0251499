/// ドメイン層
///
/// フォームの状態遷移とバリデーションルール。
/// ネットワークや設定ファイルには依存しない（APP_CONFIG の定数のみ参照）。
pub mod error;
pub mod file;
pub mod form;
pub mod validator;
