/// アプリケーション設定モジュール
///
/// コンパイル時定数として定義される静的設定。実行時には変更できない。
/// ユーザーが変更できる値は `UserConfig` で上書きする。

/// アプリケーション全体の設定
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

/// 送信先の設定
#[derive(Debug, Clone, Copy)]
pub struct ApiConfig {
    /// 既定の送信先ベースURL
    pub endpoint: &'static str,

    /// アップロード先のパス
    pub upload_path: &'static str,
}

/// アップロード関連の設定
#[derive(Debug, Clone, Copy)]
pub struct UploadConfig {
    /// 最大ファイルサイズ (バイト)。50 Mbit = 6,250,000 バイト
    pub max_file_size: u64,

    /// multipart のフィールド名
    pub field_name: &'static str,
}

/// ロギング関連の設定
#[derive(Debug, Clone, Copy)]
pub struct LoggingConfig {
    /// 既定のログレベル
    pub level: &'static str,
}

/// 設定ファイルで指定できるログレベル
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub const APP_CONFIG: AppConfig = AppConfig {
    api: ApiConfig {
        endpoint: "http://localhost:3000",
        upload_path: "/upload",
    },
    upload: UploadConfig {
        max_file_size: 6_250_000,
        field_name: "file",
    },
    logging: LoggingConfig { level: "info" },
};
