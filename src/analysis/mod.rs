mod cache;
pub mod repo_stats;
pub mod text;
pub mod transform;


pub use cache::{CacheManager, DEFAULT_TTL};
pub use repo_stats::{aggregate, aggregate_at, estimate_commits};
pub use text::{analyze, analyze_with, format_duration, parse_exclusions};
pub use transform::TextCommand;
