use std::{ffi::OsString, path::PathBuf};

use crate::models::error::AppError;

/// Resolved input and output paths for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Config {
    /// Build a config, failing unless both paths were given.
    pub fn from_parts(
        input: Option<OsString>,
        output: Option<OsString>,
    ) -> Result<Self, AppError> {
        match (input, output) {
            (Some(input), Some(output)) => Ok(Config {
                input: input.into(),
                output: output.into(),
            }),
            _ => Err(AppError::MissingArguments),
        }
    }

    /// Existence check only; unreadable or malformed files fail later.
    pub fn ensure_input_exists(&self) -> Result<(), AppError> {
        if self.input.exists() {
            Ok(())
        } else {
            Err(AppError::InputNotFound(self.input.clone()))
        }
    }
}
