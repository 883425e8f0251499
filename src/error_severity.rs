//! 終了コードを決めるためのエラー深刻度
//!
//! domain / api / config の各エラーはここで定義した深刻度に写像され、
//! main.rs がそれを終了コードに変換する。
//! このモジュール自体は他のモジュールに依存しない。

use serde::Serialize;
use std::fmt;

/// エラーの深刻度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSeverity {
    /// 入力の誤り（ファイル未選択、サイズ超過、存在しないパス、引数不正）
    ///
    /// **Exit Code: 1**
    UserError,

    /// 設定ファイルの誤り
    ///
    /// **Exit Code: 2**
    ConfigError,

    /// ネットワーク障害、サーバーエラー、I/O 障害
    ///
    /// ユーザーは同じファイルで再送信できる。
    ///
    /// **Exit Code: 3**
    SystemError,
}

impl ErrorSeverity {
    /// 対応する終了コード
    pub fn exit_code(self) -> i32 {
        match self {
            Self::UserError => 1,
            Self::ConfigError => 2,
            Self::SystemError => 3,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UserError => "user error",
            Self::ConfigError => "configuration error",
            Self::SystemError => "system error",
        };
        f.write_str(label)
    }
}
