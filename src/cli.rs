use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "travelrec", version, about = "Travel recommendations for beaches, temples and cities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search once and print the outcome
    Search {
        /// Keyword: beach, temple or country
        keyword: String,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Read search/clear commands from stdin
    Shell {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Dataset URL or path, overrides the configuration
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Print the results container as HTML
    #[arg(long)]
    pub html: bool,
}

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(Option<String>),
    Type(String),
    Clear,
    ClearResults,
    ImageError(usize),
    Show,
    Help,
    Quit,
    Invalid(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "search" if rest.is_empty() => ShellCommand::Search(None),
            "search" => ShellCommand::Search(Some(rest.to_string())),
            "type" => ShellCommand::Type(rest.to_string()),
            "clear" => ShellCommand::Clear,
            "clear-results" => ShellCommand::ClearResults,
            "image-error" => match rest.parse() {
                Ok(0) => ShellCommand::Invalid("card numbers start at 1".to_string()),
                Ok(number) => ShellCommand::ImageError(number),
                Err(_) => ShellCommand::Invalid(format!("not a card number: '{rest}'")),
            },
            "show" => ShellCommand::Show,
            "help" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => ShellCommand::Search(Some(line.to_string())),
        }
    }
}

pub const SHELL_HELP: &str = "\
commands:
  search <keyword>   type the keyword and search (bare text does the same)
  search             search with the current input
  type <text>        set the input without searching
  clear              clear results and input
  clear-results      clear results, keep input
  image-error <n>    report that the image of card n (from 1) failed to load
  show               print the results again
  quit";

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case("search beach", ShellCommand::Search(Some("beach".to_string())))]
    #[case("search", ShellCommand::Search(None))]
    #[case("  Temples ", ShellCommand::Search(Some("Temples".to_string())))]
    #[case("type  country ", ShellCommand::Type("country".to_string()))]
    #[case("clear", ShellCommand::Clear)]
    #[case("clear-results", ShellCommand::ClearResults)]
    #[case("image-error 2", ShellCommand::ImageError(2))]
    #[case("exit", ShellCommand::Quit)]
    fn test_shell_command_parsing(#[case] line: &str, #[case] expected: ShellCommand) {
        assert_eq!(ShellCommand::parse(line), expected);
    }

    #[rstest]
    #[case("image-error two", "not a card number: 'two'")]
    #[case("image-error", "not a card number: ''")]
    #[case("image-error 0", "card numbers start at 1")]
    fn test_invalid_image_number(#[case] line: &str, #[case] reason: &str) {
        assert_eq!(ShellCommand::parse(line), ShellCommand::Invalid(reason.to_string()));
    }

    #[test]
    fn test_search_subcommand_args() {
        let cli = Cli::parse_from(["travelrec", "-v", "search", "beach", "--dataset", "d.json", "--html"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Some(Commands::Search { keyword, output }) => {
                assert_eq!(keyword, "beach");
                assert_eq!(output.dataset.as_deref(), Some("d.json"));
                assert!(output.html);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
