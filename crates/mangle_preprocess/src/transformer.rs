// crates/mangle_preprocess/src/transformer.rs

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::TransformError;

/// Turns a marker argument into its replacement text.
pub trait Transformer {
    fn transform(&self, argument: &str) -> Result<String, TransformError>;
}

impl<F> Transformer for F
where
    F: Fn(&str) -> Result<String, TransformError>,
{
    fn transform(&self, argument: &str) -> Result<String, TransformError> {
        self(argument)
    }
}

/// Runs an external executable as `program <argument>` and uses its stdout.
///
/// Trailing whitespace (including the final newline) is stripped from the
/// output. Stderr is passed through to ours; stdin is closed.
#[derive(Debug, Clone)]
pub struct ProcessTransformer {
    program: PathBuf,
}

impl ProcessTransformer {
    pub fn new<P: AsRef<Path>>(program: P) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Transformer for ProcessTransformer {
    fn transform(&self, argument: &str) -> Result<String, TransformError> {
        let output = Command::new(&self.program)
            .arg(argument)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| TransformError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TransformError::Failed {
                program: self.program.clone(),
                argument: argument.to_string(),
                code: output.status.code(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|source| {
            TransformError::InvalidOutput {
                program: self.program.clone(),
                argument: argument.to_string(),
                source,
            }
        })?;
        Ok(stdout.trim_end().to_string())
    }
}
