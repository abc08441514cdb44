use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Terminal I/O error: {}", _0)]
    Terminal(#[from] std::io::Error),

    #[error("A choice prompt needs at least one option.")]
    NoChoices,

    #[error("Cursor {} is out of range for {} option(s).", .cursor, .len)]
    CursorOutOfRange { cursor: usize, len: usize },

    #[error("The sub process `{}` did not exit successfully ({}).", .executable, .status)]
    SubProcessExit {
        executable: String,
        status: std::process::ExitStatus,
    },

    #[error("Error with sub process `{}`: {}", .executable, .original)]
    SubProcess {
        executable: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("Unknown text attribute: \"{}\"", _0)]
    UnknownAttribute(String),

    #[error("Invalid option `{}`: the label may not be empty", _0)]
    EmptyLabel(String),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn sub_process(executable: impl Into<String>, original: std::io::Error) -> Self {
        Self::SubProcess {
            executable: executable.into(),
            original,
        }
    }
}
