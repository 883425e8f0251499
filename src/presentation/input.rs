/// プレゼンテーション層: ユーザー入力処理
///
/// 対話フォームの 1 行入力を読み取り、フォーム操作に変換します。
/// テストでは任意の`BufRead`を渡せます。
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// 対話フォームでの 1 行の意味
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    /// 空行: 送信ボタンを押す
    Submit,
    /// "clear": 選択を解除
    Clear,
    /// "q" / "quit": 終了
    Quit,
    /// それ以外: ファイルのパスとして選択
    Pick(String),
}

impl FormInput {
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "" => Self::Submit,
            "clear" => Self::Clear,
            "q" | "quit" => Self::Quit,
            path => Self::Pick(path.to_string()),
        }
    }
}

/// プロンプトを表示して 1 行読む
///
/// EOF の場合は `None` を返す。
pub fn read_line<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>> {
    eprint!("{}", prompt);
    io::stderr().flush()?;

    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("Failed to read from input")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
