use crate::analysis::{analyze, TextCommand};
use crate::types::AnalysisReport;

/// Word counter state: the text being edited, the exclusion list and the
/// report for both.
///
/// Every change recomputes the report from scratch; nothing carries over
/// between analyses.
#[derive(Debug, Clone, Default)]
pub struct WordCounter {
    text: String,
    excluded_words: String,
    report: AnalysisReport,
}

impl WordCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn excluded_words(&self) -> &str {
        &self.excluded_words
    }

    pub fn report(&self) -> &AnalysisReport {
        &self.report
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.refresh();
    }

    pub fn set_excluded_words(&mut self, excluded_words: impl Into<String>) {
        self.excluded_words = excluded_words.into();
        self.refresh();
    }

    /// Rewrite the text with `command` and update the report
    pub fn apply(&mut self, command: TextCommand) {
        self.text = command.apply(&self.text);
        self.refresh();
    }

    pub fn remove_extra_spaces(&mut self) {
        self.apply(TextCommand::CollapseWhitespace);
    }

    pub fn remove_duplicate_words(&mut self) {
        self.apply(TextCommand::RemoveDuplicateWords);
    }

    pub fn uppercase(&mut self) {
        self.apply(TextCommand::Uppercase);
    }

    pub fn lowercase(&mut self) {
        self.apply(TextCommand::Lowercase);
    }

    pub fn title_case(&mut self) {
        self.apply(TextCommand::TitleCase);
    }

    fn refresh(&mut self) {
        self.report = analyze(&self.text, &self.excluded_words);
    }
}
