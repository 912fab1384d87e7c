//! CLI: command-line surface of the viewer binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::source::TranslationQuery;
use crate::view::LogView;

#[derive(Parser, Debug)]
#[command(name = "viewer", version, about = "Fetch and display debug, celery and translation logs")]
pub struct Cli {
    /// Config file (overrides VIEWER_CONFIG_FILE)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the log endpoints (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print entries as JSON lines instead of colored text
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    pub no_color: bool,

    /// Print parse counters to stderr after the list
    #[arg(long, global = true, action = clap::ArgAction::SetTrue)]
    pub stats: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Application debug log
    Debug,
    /// Task-queue (celery) log
    Celery,
    /// Translation pipeline log
    Translation(TranslationArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct TranslationArgs {
    /// Look back this many hours (1-168)
    #[arg(long)]
    pub hours: Option<u32>,

    /// Return at most this many records (1-1000)
    #[arg(long)]
    pub limit: Option<u32>,
}

impl Command {
    pub fn view(&self) -> LogView {
        match self {
            Command::Debug => LogView::Debug,
            Command::Celery => LogView::Celery,
            Command::Translation(_) => LogView::Translation,
        }
    }

    /// Query for this command, filling unset values from `defaults`.
    pub fn query(&self, defaults: &crate::conf::TranslationDefaults) -> TranslationQuery {
        match self {
            Command::Translation(args) => TranslationQuery::new(
                Some(args.hours.unwrap_or(defaults.hours)),
                Some(args.limit.unwrap_or(defaults.limit)),
            ),
            _ => TranslationQuery::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::TranslationDefaults;

    #[test]
    fn test_parse_translation_args() {
        let cli = Cli::try_parse_from(["viewer", "translation", "--hours", "24", "--json"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.command.view(), LogView::Translation);

        let query = cli.command.query(&TranslationDefaults::default());
        assert_eq!(query, TranslationQuery::new(Some(24), Some(100)));
    }

    #[test]
    fn test_non_translation_has_empty_query() {
        let cli = Cli::try_parse_from(["viewer", "--no-color", "celery"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.command.view(), LogView::Celery);
        assert_eq!(cli.command.query(&TranslationDefaults::default()), TranslationQuery::default());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["viewer"]).is_err());
    }
}
