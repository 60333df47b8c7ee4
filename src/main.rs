//! Portfolio statistics tool
//!
//! Runs the word counter over a file or standard input, or prints the
//! GitHub statistics shown on the portfolio's home page.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use portfolio_stats::app::{ReportPanel, UserStatsPanel, WordCounter};
use portfolio_stats::{Config, GitHubClient, GitHubStats, TextCommand};

#[derive(Parser)]
#[command(name = "portfolio-stats", version, about)]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count words and estimate readability
    Words {
        /// File to analyze; reads standard input when omitted
        file: Option<PathBuf>,

        /// Words to leave out of word statistics, comma or space separated
        #[arg(short, long, default_value = "")]
        exclude: String,

        /// Rewrite the text before analysis, in the order given
        #[arg(short, long, value_enum)]
        transform: Vec<Transform>,

        /// Print the transformed text after the report
        #[arg(long)]
        print_text: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show GitHub statistics for the configured profile
    Github {
        /// GitHub login; defaults to the GitHub entry of the social links
        #[arg(short, long)]
        user: Option<String>,

        /// List non-fork repositories instead of statistics
        #[arg(long)]
        repos: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Transform {
    Collapse,
    Dedupe,
    Upper,
    Lower,
    Title,
}

impl From<Transform> for TextCommand {
    fn from(transform: Transform) -> Self {
        match transform {
            Transform::Collapse => TextCommand::CollapseWhitespace,
            Transform::Dedupe => TextCommand::RemoveDuplicateWords,
            Transform::Upper => TextCommand::Uppercase,
            Transform::Lower => TextCommand::Lowercase,
            Transform::Title => TextCommand::TitleCase,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Words {
            file,
            exclude,
            transform,
            print_text,
            json,
        } => run_words(file, &exclude, &transform, print_text, json),
        Command::Github { user, repos, json } => {
            let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
            let rt = Runtime::new().context("failed to start the async runtime")?;
            rt.block_on(run_github(config, user, repos, json))
        }
    }
}

fn run_words(
    file: Option<PathBuf>,
    exclude: &str,
    transforms: &[Transform],
    print_text: bool,
    json: bool,
) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read standard input")?;
            buffer
        }
    };

    let mut counter = WordCounter::new();
    counter.set_excluded_words(exclude);
    counter.set_text(text);
    for transform in transforms {
        counter.apply((*transform).into());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(counter.report())?);
    } else {
        print!("{}", ReportPanel(counter.report()));
    }
    if print_text {
        println!("\n{}", counter.text());
    }

    Ok(())
}

async fn run_github(config: Config, user: Option<String>, repos: bool, json: bool) -> Result<()> {
    let username = user.unwrap_or_else(|| config.github_username());
    if username.is_empty() {
        bail!("no GitHub username: pass --user or add a \"GitHub\" social link to the config");
    }

    let client = GitHubClient::new(&config.github).context("failed to create GitHub client")?;
    let stats = GitHubStats::new(
        client,
        config.page_limits(),
        config.cache_ttl(),
        config.cache.capacity,
    );

    if repos {
        let repositories = stats.repositories(&username).await;
        if json {
            println!("{}", serde_json::to_string_pretty(&repositories)?);
        } else {
            for repo in &repositories {
                println!(
                    "{:<30} {:>5} stars  {}",
                    repo.name,
                    repo.stars,
                    repo.language.as_deref().unwrap_or("-")
                );
            }
        }
        return Ok(());
    }

    let report = stats.user_stats(&username).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("GitHub statistics for {}", username);
        print!("{}", UserStatsPanel(&report));
    }

    Ok(())
}
