/// プレゼンテーション層: フォームの表示
///
/// ドメイン層の`FormState`を端末表示用の`FormView`に変換します。
/// `From<&FormState>`で借用して変換するので、フォームの所有権は奪いません。
use crate::domain::form::FormState;
use std::fmt;

/// ファイル未選択時のラベル
pub const PLACEHOLDER_LABEL: [&str; 2] = ["Drag and drop files", "Or browse files"];

/// ファイル選択済みのときの 2 行目
pub const CHANGE_FILE_LABEL: &str = "Choose a different file";

pub const SUBMIT_LABEL: &str = "Start processing";
pub const SUBMITTING_LABEL: &str = "Uploading...";

/// 表示用のフォーム
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// ファイル入力欄のラベル（2 行）
    pub label: [String; 2],
    /// アラート（バリデーションエラー）
    pub alert: Option<String>,
    pub button_label: &'static str,
    pub submit_disabled: bool,
}

impl From<&FormState> for FormView {
    fn from(form: &FormState) -> Self {
        let label = match form.selected_file() {
            Some(file) => [file.name.clone(), CHANGE_FILE_LABEL.to_string()],
            None => PLACEHOLDER_LABEL.map(String::from),
        };

        let button_label = if form.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        };

        Self {
            label,
            alert: form.error().map(String::from),
            button_label,
            submit_disabled: form.is_submit_disabled(),
        }
    }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.label {
            writeln!(f, "  {}", line)?;
        }
        if let Some(alert) = &self.alert {
            writeln!(f, "  alert: {}", alert)?;
        }
        write!(f, "  [{}]", self.button_label)?;
        if self.submit_disabled {
            write!(f, " (disabled)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::file::SelectedFile;

    #[test]
    fn test_empty_form_shows_placeholder() {
        let view = FormView::from(&FormState::new());

        assert_eq!(view.label, ["Drag and drop files", "Or browse files"]);
        assert!(view.alert.is_none());
        assert_eq!(view.button_label, "Start processing");
        assert!(!view.submit_disabled);
    }

    #[test]
    fn test_selected_file_shows_name() {
        let mut form = FormState::new();
        form.select_file(SelectedFile::new("report.pdf", 6_000_000, "/tmp/report.pdf"));

        let view = FormView::from(&form);
        assert_eq!(view.label, ["report.pdf", "Choose a different file"]);
        assert_eq!(
            view.to_string(),
            "  report.pdf\n  Choose a different file\n  [Start processing]"
        );
    }

    #[test]
    fn test_large_file_renders_alert_and_disabled_button() {
        let mut form = FormState::new();
        form.select_file(SelectedFile::new("movie.mov", 7_000_000, "/tmp/movie.mov"));

        let rendered = FormView::from(&form).to_string();
        assert!(rendered.contains("alert: File size cannot exceed 50Mb."));
        assert!(rendered.ends_with("[Start processing] (disabled)"));
    }

    #[test]
    fn test_submitting_form_shows_uploading() {
        let mut form = FormState::new();
        form.select_file(SelectedFile::new("report.pdf", 10, "/tmp/report.pdf"));
        form.begin_submit().unwrap();

        let view = FormView::from(&form);
        assert_eq!(view.button_label, "Uploading...");
        assert!(view.submit_disabled);
    }

    #[test]
    fn test_same_file_twice_renders_single_alert() {
        let mut form = FormState::new();
        let file = SelectedFile::new("movie.mov", 7_000_000, "/tmp/movie.mov");
        form.select_file(file.clone());
        form.select_file(file);

        let rendered = FormView::from(&form).to_string();
        assert_eq!(rendered.matches("alert:").count(), 1);
    }
}
