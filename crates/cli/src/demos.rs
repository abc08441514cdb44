//! Demonstration prompts for `choose demo`.

use choice_prompt_core::error::Result;

use crate::choice_selection::{Choice, ChoiceSelector, Selection, StyleConfig};
use crate::cli_args::DemoName;

/// Builds the yes/no confirmation, starting on "no".
pub fn yes_no_selector(style: StyleConfig) -> Result<ChoiceSelector<bool>> {
    ChoiceSelector::new(
        "Do you want to continue?",
        vec![Choice::new("yes", true), Choice::new("no", false)],
    )?
    .with_cursor(1)
    .map(|selector| selector.with_style(style))
}

/// Builds the size picker, starting on "medium".
pub fn size_selector(style: StyleConfig) -> Result<ChoiceSelector<&'static str>> {
    ChoiceSelector::new(
        "Select your size:",
        vec![
            Choice::new("small", "s"),
            Choice::new("medium", "m"),
            Choice::new("large", "l"),
            Choice::new("extra-large", "xl"),
        ],
    )?
    .with_cursor(1)
    .map(|selector| selector.with_style(style))
}

/// Builds the deployment environment picker.
pub fn environment_selector(style: StyleConfig) -> Result<ChoiceSelector<&'static str>> {
    Ok(ChoiceSelector::new(
        "Deploy to which environment?",
        vec![
            Choice::new("development", "dev"),
            Choice::new("staging", "staging"),
            Choice::new("production", "prod"),
        ],
    )?
    .with_style(style))
}

fn demo_yes_no(style: StyleConfig) -> Result<()> {
    match yes_no_selector(style)?.run()? {
        Selection::Cancelled => println!("\nCancelled"),
        Selection::Chosen(choice) if choice.value => {
            println!("\nYou selected: Yes - Continuing...");
        }
        Selection::Chosen(_) => println!("\nYou selected: No - Aborting..."),
    }
    Ok(())
}

fn demo_size(style: StyleConfig) -> Result<()> {
    match size_selector(style)?.run()? {
        Selection::Cancelled => println!("\nCancelled"),
        Selection::Chosen(choice) => {
            println!("\nYou selected: {} (value: {})", choice.label, choice.value);
        }
    }
    Ok(())
}

fn demo_environment(style: StyleConfig) -> Result<()> {
    match environment_selector(style)?.run()? {
        Selection::Cancelled => println!("\nDeployment cancelled"),
        Selection::Chosen(choice) => {
            println!(
                "\nDeploying to: {} (environment: {})",
                choice.label, choice.value
            );
        }
    }
    Ok(())
}

/// Runs the named demo, or all of them in turn.
///
/// # Errors
///
/// Returns an error if the terminal fails during a prompt.
pub fn run(name: DemoName, style: StyleConfig) -> Result<()> {
    match name {
        DemoName::YesNo => demo_yes_no(style),
        DemoName::Size => demo_size(style),
        DemoName::Environment => demo_environment(style),
        DemoName::All => {
            let separator = "=".repeat(50);

            println!("=== Demo 1: Yes/No Confirmation ===\n");
            demo_yes_no(style)?;
            println!("\n{separator}\n");

            println!("=== Demo 2: Multiple Options ===\n");
            demo_size(style)?;
            println!("\n{separator}\n");

            println!("=== Demo 3: Environment Selection ===\n");
            demo_environment(style)
        }
    }
}
