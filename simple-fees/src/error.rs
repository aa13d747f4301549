use {std::path::PathBuf, thiserror::Error};

/// Errors produced while loading a fee schedule document.
///
/// Only primitive values of the wrong shape are errors. Unknown extras,
/// unknown operations and missing sections are accepted and ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleFormatError {
    /// The text is not a well-formed JSON document.
    #[error("Fee schedule is not valid JSON at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// A field holds a value of the wrong type, e.g. a string where a fee is expected.
    #[error("Invalid fee schedule value at `{path}`: {message}")]
    InvalidValue { path: String, message: String },

    /// The schedule file could not be read.
    #[error("Unable to read fee schedule {}: {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },
}

impl ScheduleFormatError {
    /// Location of the offending value, `$` for document-level failures.
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidValue { path, .. } => path,
            Self::Syntax { .. } | Self::Unreadable { .. } => "$",
        }
    }
}

impl From<serde_json::Error> for ScheduleFormatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ScheduleFormatError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        if !err.inner().is_data() {
            return err.into_inner().into();
        }
        let path = match err.path().iter().next() {
            Some(_) => err.path().to_string(),
            None => "$".to_string(),
        };
        Self::InvalidValue {
            path,
            message: err.into_inner().to_string(),
        }
    }
}
