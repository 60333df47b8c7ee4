use std::fmt;

use crate::types::{AnalysisReport, UserStatsReport};

/// Plain-text word counter panel
pub struct ReportPanel<'a>(pub &'a AnalysisReport);

/// Plain-text GitHub statistics section
pub struct UserStatsPanel<'a>(pub &'a UserStatsReport);

/// Render the word counter panel as plain text
pub fn render_report(report: &AnalysisReport) -> String {
    ReportPanel(report).to_string()
}

/// Render the GitHub statistics section as plain text
pub fn render_user_stats(stats: &UserStatsReport) -> String {
    UserStatsPanel(stats).to_string()
}

impl fmt::Display for ReportPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "Words:                 {}", report.words)?;
        writeln!(f, "Characters:            {}", report.characters)?;
        writeln!(f, "Characters (no spaces): {}", report.characters_no_spaces)?;
        writeln!(f, "Sentences:             {}", report.sentences)?;
        writeln!(f, "Paragraphs:            {}", report.paragraphs)?;
        writeln!(f, "Reading time:          {}", report.reading_time)?;
        writeln!(f, "Speaking time:         {}", report.speaking_time)?;
        writeln!(f, "Avg. word length:      {:.2}", report.avg_word_length)?;
        writeln!(
            f,
            "Readability (Flesch):  {} (avg. sentence length {:.2})",
            report.flesch_reading_ease.score, report.flesch_reading_ease.avg_sentence_length
        )?;

        if !report.longest_words.is_empty() {
            writeln!(f, "Longest words:         {}", report.longest_words.join(", "))?;
        }

        if !report.word_frequency.is_empty() {
            writeln!(f, "Top words:")?;
            for entry in &report.word_frequency {
                writeln!(f, "  {:<20} {}", entry.word, entry.count)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for UserStatsPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;

        writeln!(f, "Repositories:      {}", stats.total_repos)?;
        writeln!(f, "Stars:             {}", stats.total_stars)?;
        writeln!(f, "Forks:             {}", stats.total_forks)?;
        writeln!(f, "Commits (approx.): {}", stats.total_commits_estimate)?;
        writeln!(
            f,
            "Active:            {} to {}",
            stats.earliest_repo_date.format("%Y-%m-%d"),
            stats.latest_repo_date.format("%Y-%m-%d")
        )?;

        if !stats.top_languages.is_empty() {
            writeln!(f, "Top languages:")?;
            for language in &stats.top_languages {
                writeln!(f, "  {:<18} {}", language.name, language.count)?;
            }
        }

        Ok(())
    }
}
