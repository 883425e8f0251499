/// プレゼンテーション層モジュール
///
/// ドメイン層の状態と端末表示の橋渡しを行います。
/// プレゼンテーション層はドメイン層に依存しますが、その逆はありません。
///
/// # モジュール
/// - `input`: 対話フォームの入力処理
/// - `output`: コマンド結果の出力（人間向け・機械向け）
/// - `view`: フォームの表示（ラベル・アラート・送信ボタン）
pub mod input;
pub mod output;
pub mod view;
