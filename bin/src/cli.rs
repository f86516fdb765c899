use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unistyle_text_transform::{StyleSet, StyleTag};

/// Command-line interface configuration
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file, overriding the discovered config.toml
    #[arg(long, global = true, env = "UNISTYLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (or a directory for a per-process file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands. Each reads TEXT, or stdin when TEXT is omitted.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Style text as if typed with the given styles active
    Style {
        /// Comma separated styles, e.g. `bold,italic,underline`
        #[arg(short, long)]
        styles: StyleSet,

        text: Option<String>,
    },

    /// Flip one style on every character of the text
    Toggle {
        #[arg(short, long)]
        tag: StyleTag,

        text: Option<String>,
    },

    /// Apply the change between two style sets to already styled text
    Restyle {
        /// Style set before the change
        #[arg(long, default_value = "")]
        before: StyleSet,

        /// Style set after the change
        #[arg(long, default_value = "")]
        after: StyleSet,

        text: Option<String>,
    },

    /// Show the base character and styles of every position
    Decode { text: Option<String> },

    /// Remove all styling
    Strip { text: Option<String> },
}

impl Command {
    pub fn text(&self) -> Option<&str> {
        match self {
            Command::Style { text, .. }
            | Command::Toggle { text, .. }
            | Command::Restyle { text, .. }
            | Command::Decode { text }
            | Command::Strip { text } => text.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("unistyle").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn style_command() {
        let cli = parse(&["style", "-s", "bold,italic", "hello"]);
        match cli.command {
            Command::Style { styles, text } => {
                assert_eq!(styles, StyleSet::BOLD | StyleSet::ITALIC);
                assert_eq!(text.as_deref(), Some("hello"));
            },
            other => panic!("expected style, got {other:?}"),
        }
    }

    #[test]
    fn restyle_defaults_to_empty_sets() {
        let cli = parse(&["restyle", "--after", "underline"]);
        match cli.command {
            Command::Restyle {
                before,
                after,
                text,
            } => {
                assert!(before.is_empty());
                assert_eq!(after, StyleSet::UNDERLINE);
                assert!(text.is_none());
            },
            other => panic!("expected restyle, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["strip", "x", "--config", "my.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
        assert_eq!(cli.command.text(), Some("x"));
    }

    #[test]
    fn rejects_unknown_style() {
        let result = Cli::try_parse_from(["unistyle", "toggle", "-t", "sparkly", "x"]);
        assert!(result.is_err());
    }
}
