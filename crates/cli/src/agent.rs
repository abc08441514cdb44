//! Hand-off to an external CLI coding agent.

use std::process::Command;

use choice_prompt_core::error::Result;
use choice_prompt_core::execution::execute_with_prefix;

/// Prefix written before every line the agent prints
pub const COPILOT_OUTPUT_PREFIX: &str = "  Copilot> ";

/// The GitHub Copilot CLI, run non-interactively with all tools allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopilotAgent {
    executable: String,
}

impl CopilotAgent {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn descriptor(&self) -> String {
        format!("GitHub Copilot CLI ({})", self.executable)
    }

    /// Builds the command that sends `prompt` to the agent.
    pub fn command(&self, prompt: &str) -> Command {
        let mut command = Command::new(&self.executable);
        command.args(["--allow-all-tools", "--prompt", prompt]);
        command
    }

    /// Runs the agent on `prompt`, forwarding its output with
    /// [`COPILOT_OUTPUT_PREFIX`].
    ///
    /// # Errors
    ///
    /// Returns an error if the agent cannot be started or exits unsuccessfully.
    pub fn execute(&self, prompt: &str) -> Result<()> {
        execute_with_prefix(self.command(prompt), COPILOT_OUTPUT_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choice_prompt_core::error::Error;

    #[test]
    fn test_descriptor() {
        let agent = CopilotAgent::new("/opt/bin/copilot");
        assert_eq!(agent.descriptor(), "GitHub Copilot CLI (/opt/bin/copilot)");
    }

    #[test]
    fn test_command_shape() {
        let agent = CopilotAgent::new("copilot");
        let command = agent.command("add a README");

        assert_eq!(command.get_program(), "copilot");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, ["--allow-all-tools", "--prompt", "add a README"]);
    }

    #[test]
    fn test_execute_missing_agent() {
        let agent = CopilotAgent::new("choice-prompt-missing-agent");
        assert!(matches!(
            agent.execute("hello"),
            Err(Error::SubProcess { .. })
        ));
    }
}
