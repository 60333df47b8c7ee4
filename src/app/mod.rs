pub mod state;
pub mod ui;

pub use state::WordCounter;
pub use ui::{render_report, render_user_stats, ReportPanel, UserStatsPanel};
