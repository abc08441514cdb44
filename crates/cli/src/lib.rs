//! Choice Prompt CLI Library
//!
//! This crate provides the interactive side of choice-prompt: the inline,
//! keyboard-driven single-choice selector and the `choose` command-line tool
//! built on it.
//!
//! # Key Features
//!
//! - **Inline Choice Prompt**: Pick one option from a list without leaving the shell
//! - **Typed Values**: Each option carries a value of the caller's chosen type
//! - **Styling**: Four independently styled roles, configurable from YAML
//! - **Agent Hand-off**: Confirm and run a CLI coding agent with prefixed output
//!
//! # Architecture
//!
//! - [`choice_selection`]: The selector state machine, rendering and terminal loop
//! - [`cli_args`]: Command-line argument parsing
//! - [`demos`]: Demonstration prompts
//! - [`agent`]: The GitHub Copilot CLI wrapper
//!
//! # Examples
//!
//! ```bash
//! # Print the chosen value
//! choose pick --prompt "Deploy to which environment?" development=dev staging production=prod
//!
//! # Start on the second option
//! choose pick -p "Continue?" -d 1 yes no
//!
//! # Walk through the demos
//! choose demo
//!
//! # Confirm, then run the agent
//! choose agent "add unit tests for the parser"
//! ```
//!
//! Using the selector from code:
//!
//! ```no_run
//! use choice_prompt_cli::choice_selection::{Choice, ChoiceSelector, Selection};
//!
//! let selector = ChoiceSelector::new(
//!     "Do you want to continue?",
//!     vec![Choice::new("yes", true), Choice::new("no", false)],
//! )?
//! .with_cursor(1)?;
//!
//! match selector.run()? {
//!     Selection::Chosen(choice) => println!("{}", choice.value),
//!     Selection::Cancelled => println!("cancelled"),
//! }
//! # Ok::<(), choice_prompt_core::error::Error>(())
//! ```

pub mod agent;
pub mod choice_selection;
pub mod cli_args;
pub mod demos;
