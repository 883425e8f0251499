//! ログ出力の初期化
//!
//! tracing の fmt サブスクライバーを stderr に向けて登録する。
//! レベルは RUST_LOG が最優先で、未設定ならユーザー設定（既定は info）。
//! stdout は --machine の JSON 出力専用。

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// グローバルサブスクライバーを登録する
///
/// # Errors
/// 既に登録済みの場合
pub fn init(default_level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_only_once() {
        assert!(init("info").is_ok());
        assert!(init("debug").is_err());
    }
}
