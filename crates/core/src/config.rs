//! Configuration path utilities for choice-prompt.
//!
//! This module provides functions for resolving configuration file paths
//! and expanding shell variables like `~` in paths.

/// Default path for the style configuration file
const DEFAULT_STYLE_PATH: &str = "~/.choice-prompt/style.yml";

/// Default executable for the GitHub Copilot CLI agent
pub const DEFAULT_AGENT_EXECUTABLE: &str = "copilot";

/// Resolves the style configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// style path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use choice_prompt_core::config::get_style_path;
///
/// // Use default path
/// let default_path = get_style_path(&None);
///
/// // Use custom path
/// let custom_path = get_style_path(&Some("/path/to/style.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/style.yml");
/// ```
pub fn get_style_path(style_path_arg: &Option<String>) -> String {
    let style_path = match style_path_arg {
        Some(style_path) => style_path,
        None => DEFAULT_STYLE_PATH,
    };

    shellexpand::tilde(style_path).to_string()
}
