// crates/mangle_preprocess/src/error.rs

//! Error types for marker substitution and file preprocessing.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors raised while turning a marker argument into its replacement text.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The transformer executable could not be started.
    #[error("Failed to run transformer {}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The transformer ran but did not exit successfully.
    #[error(
        "Transformer {} failed for argument {argument:?} ({})",
        .program.display(),
        describe_exit(.code)
    )]
    Failed {
        program: PathBuf,
        argument: String,
        /// Exit code, or `None` when the process was killed by a signal.
        code: Option<i32>,
    },

    /// The transformer wrote something that is not UTF-8.
    #[error(
        "Transformer {} produced non-UTF-8 output for argument {argument:?}",
        .program.display()
    )]
    InvalidOutput {
        program: PathBuf,
        argument: String,
        #[source]
        source: FromUtf8Error,
    },
}

/// Errors surfaced by a full preprocessing run.
#[derive(Error, Debug)]
pub enum PreprocessError {
    #[error("Expected <input> <output> or <transformer> <input> <output>, got {count} argument(s)")]
    Usage { count: usize },

    #[error("Error reading {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error("Error writing {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
