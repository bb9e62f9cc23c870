use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::json;
use tracing::debug;

use charades::config::Config;
use charades::selector::random::SeededSource;
use charades::selector::TopicSelector;
use charades::session::Session;

/// Charades: pick a random acting prompt, optionally from a theme.
///
/// Theme names are typo-tolerant ("animl", "xmas", "80s" all work). Leave
/// the theme out to draw from the General pool.
#[derive(Parser)]
#[command(name = "charades", version, about)]
struct Cli {
    /// Topic catalog JSON file (overrides CHARADES_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Seed for reproducible draws (overrides CHARADES_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print machine-readable JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw one topic
    Topic {
        /// Theme name (fuzzy matched); omit for General topics
        theme: Option<String>,

        /// Topic label already shown; repeat for each one
        #[arg(long = "used", value_name = "LABEL")]
        used: Vec<String>,
    },

    /// Deal several topics in a row without repeats
    Deal {
        /// Theme name (fuzzy matched); omit for General topics
        theme: Option<String>,

        /// Number of topics to deal (default: 5)
        #[arg(long, default_value = "5")]
        rounds: u32,
    },

    /// List the available themes with their topic counts
    Themes,

    /// Count the topics a theme draws from
    Count {
        /// Theme name (fuzzy matched); omit to count General topics
        theme: Option<String>,
    },

    /// Show which theme an input resolves to
    Match {
        /// Raw theme text as a player would type it
        input: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging on stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("charades=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?.with_overrides(cli.catalog.clone(), cli.seed);
    let selector = build_selector(&config)?;

    match cli.command {
        Commands::Topic { theme, used } => {
            let theme = theme.unwrap_or_default();
            let selection = selector.get_topic(&theme, &used)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&selection)?);
            } else {
                charades::output::terminal::display_selection(&selection);
            }
        }

        Commands::Deal { theme, rounds } => {
            let mut session = Session::new(theme.unwrap_or_default());
            let mut dealt = Vec::with_capacity(rounds as usize);

            for round in 1..=rounds {
                let selection = session.deal(&selector)?;
                if !cli.json {
                    println!("{}", format!("--- Round {round} ---").dimmed());
                    charades::output::terminal::display_selection(&selection);
                }
                dealt.push(selection);
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&dealt)?);
            }
        }

        Commands::Themes => {
            let themes: Vec<(String, usize)> = selector
                .get_themes()
                .into_iter()
                .map(|theme| {
                    let count = selector.get_topic_count(&theme);
                    (theme, count)
                })
                .collect();
            let general_count = selector.get_topic_count("");

            if cli.json {
                let listing: Vec<_> = themes
                    .iter()
                    .map(|(theme, count)| json!({ "theme": theme, "count": count }))
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "general": general_count,
                        "themes": listing,
                    }))?
                );
            } else {
                charades::output::terminal::display_themes(&themes, general_count);
            }
        }

        Commands::Count { theme } => {
            let theme = theme.unwrap_or_default();
            let resolved = selector.fuzzy_match_theme(&theme);
            let count = selector.get_topic_count(&theme);

            if cli.json {
                println!(
                    "{}",
                    json!({ "input": theme, "theme": resolved, "count": count })
                );
            } else {
                charades::output::terminal::display_count(&theme, &resolved, count);
            }
        }

        Commands::Match { input } => {
            let resolved = selector.fuzzy_match_theme(&input);

            if cli.json {
                println!("{}", json!({ "input": input, "theme": resolved }));
            } else {
                println!("{} → {}", input.trim(), resolved.bold());
            }
        }
    }

    Ok(())
}

/// Load the configured catalog and wrap it in a selector.
fn build_selector(config: &Config) -> Result<TopicSelector> {
    let source = config.catalog_source();
    let catalog = source.load()?;
    debug!(source = ?source, topics = catalog.len(), "Catalog ready");

    Ok(match config.seed {
        Some(seed) => TopicSelector::with_source(catalog, SeededSource::new(seed)),
        None => TopicSelector::new(catalog),
    })
}
