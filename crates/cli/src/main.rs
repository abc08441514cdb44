use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use choice_prompt_cli::agent::CopilotAgent;
use choice_prompt_cli::choice_selection::{
    load_style_config, Choice, ChoiceSelector, Selection, StyleConfig,
};
use choice_prompt_cli::cli_args::{parse_choice, Action, Args};
use choice_prompt_cli::demos;
use choice_prompt_core::config::DEFAULT_AGENT_EXECUTABLE;
use choice_prompt_core::error::Result;

/// Ask for one of the options and print its value
fn pick(
    style: StyleConfig,
    prompt: String,
    default: Option<usize>,
    options: &[String],
) -> Result<ExitCode> {
    let choices = options
        .iter()
        .map(|raw| parse_choice(raw))
        .collect::<Result<Vec<_>>>()?;

    let mut selector = ChoiceSelector::new(prompt, choices)?.with_style(style);
    if let Some(default) = default {
        selector.set_cursor(default)?;
    }

    match selector.run()? {
        Selection::Chosen(choice) => {
            println!("{}", choice.value);
            Ok(ExitCode::SUCCESS)
        }
        Selection::Cancelled => {
            debug!("Pick cancelled by user");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Confirm with the user, then hand the prompt to the agent
fn run_agent(style: StyleConfig, executable: Option<String>, prompt: &str) -> Result<ExitCode> {
    let agent = CopilotAgent::new(executable.unwrap_or_else(|| DEFAULT_AGENT_EXECUTABLE.to_string()));

    println!("Prompt: {prompt}");
    let confirmation = ChoiceSelector::new(
        format!("Send this prompt to {}?", agent.descriptor()),
        vec![Choice::new("yes", true), Choice::new("no", false)],
    )?
    .with_cursor(1)?
    .with_style(style);

    match confirmation.run()?.chosen() {
        Some(choice) if choice.value => {
            info!("Running {}", agent.descriptor());
            agent.execute(prompt)?;
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            println!("Agent run cancelled.");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn execute() -> Result<ExitCode> {
    let args = Args::parse();
    let style = load_style_config(&args.style_path)?;

    match args.action {
        Action::Pick {
            prompt,
            default,
            options,
        } => pick(style, prompt, default, &options),
        Action::Demo { name } => {
            demos::run(name, style)?;
            Ok(ExitCode::SUCCESS)
        }
        Action::Agent { executable, prompt } => run_agent(style, executable, &prompt),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
