//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and the parsing
//! of `label=value` option arguments using the `clap` crate.

use choice_prompt_core::error::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::choice_selection::Choice;

/// Command-line arguments for the `choose` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use choice_prompt_cli::cli_args::{Action, Args};
///
/// let args = Args::parse_from(["choose", "pick", "yes", "no"]);
/// assert!(matches!(args.action, Action::Pick { .. }));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the style config file YAML.
    ///
    /// If not provided, defaults to `~/.choice-prompt/style.yml`.
    #[arg(long, short = 's', global = true)]
    pub style_path: Option<String>,

    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Ask the user to pick one of the given options and print its value.
    ///
    /// Exits with a failure status, printing nothing, if the user cancels.
    Pick {
        /// Text shown before the options.
        #[arg(long, short = 'p', default_value = "")]
        prompt: String,

        /// Index of the option the cursor starts on.
        #[arg(long, short = 'd')]
        default: Option<usize>,

        /// Options as `label` or `label=value`.
        ///
        /// The label is printed when no value is given.
        #[arg(required = true, num_args = 1..)]
        options: Vec<String>,
    },

    /// Run the demonstration prompts.
    Demo {
        #[arg(value_enum, default_value_t = DemoName::All)]
        name: DemoName,
    },

    /// Confirm, then send a prompt to the GitHub Copilot CLI agent.
    Agent {
        /// Path to the agent executable.
        ///
        /// If not provided, `copilot` is looked up on the `PATH`.
        #[arg(long, short = 'e')]
        executable: Option<String>,

        /// The prompt passed to the agent.
        prompt: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoName {
    YesNo,
    Size,
    Environment,
    All,
}

/// Parses an option argument of the form `label` or `label=value`.
///
/// Only the first `=` separates label from value, so values may contain `=`.
///
/// # Errors
///
/// Returns [`Error::EmptyLabel`] if the label part is empty.
pub fn parse_choice(raw: &str) -> Result<Choice<String>> {
    let (label, value) = match raw.split_once('=') {
        Some((label, value)) => (label, value),
        None => (raw, raw),
    };

    if label.is_empty() {
        return Err(Error::EmptyLabel(raw.to_string()));
    }

    Ok(Choice::new(label, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_pick_args() {
        let args = Args::parse_from([
            "choose",
            "pick",
            "--prompt",
            "Deploy to which environment?",
            "-d",
            "1",
            "development=dev",
            "staging",
        ]);

        match args.action {
            Action::Pick {
                prompt,
                default,
                options,
            } => {
                assert_eq!(prompt, "Deploy to which environment?");
                assert_eq!(default, Some(1));
                assert_eq!(options, vec!["development=dev", "staging"]);
            }
            other => panic!("Expected pick, got {other:?}"),
        }
        assert!(args.style_path.is_none());
    }

    #[test]
    fn test_pick_requires_options() {
        assert!(Args::try_parse_from(["choose", "pick"]).is_err());
    }

    #[test]
    fn test_global_style_path_after_subcommand() {
        let args = Args::parse_from(["choose", "demo", "-s", "/tmp/style.yml"]);
        assert_eq!(args.style_path, Some("/tmp/style.yml".to_string()));
        assert!(matches!(args.action, Action::Demo { name: DemoName::All }));
    }

    #[test]
    fn test_demo_names() {
        let args = Args::parse_from(["choose", "demo", "yes-no"]);
        assert!(matches!(args.action, Action::Demo { name: DemoName::YesNo }));

        assert!(Args::try_parse_from(["choose", "demo", "colors"]).is_err());
    }

    #[test]
    fn test_agent_args() {
        let args = Args::parse_from(["choose", "agent", "-e", "/usr/local/bin/copilot", "fix it"]);
        match args.action {
            Action::Agent { executable, prompt } => {
                assert_eq!(executable, Some("/usr/local/bin/copilot".to_string()));
                assert_eq!(prompt, "fix it");
            }
            other => panic!("Expected agent, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(
            parse_choice("production=prod").unwrap(),
            Choice::new("production", "prod".to_string())
        );
        assert_eq!(
            parse_choice("staging").unwrap(),
            Choice::new("staging", "staging".to_string())
        );
        assert_eq!(
            parse_choice("query=a=b").unwrap(),
            Choice::new("query", "a=b".to_string())
        );
        assert_eq!(
            parse_choice("empty=").unwrap(),
            Choice::new("empty", String::new())
        );
    }

    #[test]
    fn test_parse_choice_empty_label() {
        assert!(matches!(parse_choice("=value"), Err(Error::EmptyLabel(_))));
        assert!(matches!(parse_choice(""), Err(Error::EmptyLabel(_))));
    }
}
