//! Choice Prompt Core Library
//!
//! This crate holds the pieces of choice-prompt that do not touch the terminal:
//! the error type shared by the workspace, the YAML style configuration model
//! and loader, config path resolution, and the process runner used to forward
//! a child's output with a line prefix.
//!
//! # Examples
//!
//! Loading a style definition, falling back to defaults when the file is absent:
//!
//! ```no_run
//! use choice_prompt_core::{config::get_style_path, file_handling::get_style_definition};
//!
//! let path = get_style_path(&None);
//! match get_style_definition(&path)? {
//!     Some(style) => println!("Loaded custom style: {:?}", style),
//!     None => println!("Using default style"),
//! }
//! # Ok::<(), choice_prompt_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod style_definitions;
