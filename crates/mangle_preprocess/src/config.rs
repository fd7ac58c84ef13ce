// crates/mangle_preprocess/src/config.rs

use std::env;
use std::path::PathBuf;

use crate::error::PreprocessError;

/// Transformer used when only `<input> <output>` are given.
pub const DEFAULT_TRANSFORMER: &str = "./mangler";

/// Environment variable overriding [`DEFAULT_TRANSFORMER`].
pub const TRANSFORMER_ENV_VAR: &str = "MANGLER_PATH";

/// Runtime configuration composed from the command line and the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreprocessConfig {
    pub transformer: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub verbose: bool,
}

impl PreprocessConfig {
    /// Builds a config from positional arguments: either `<input> <output>`
    /// or `<transformer> <input> <output>`.
    pub fn from_positionals(
        positionals: Vec<PathBuf>,
        verbose: bool,
    ) -> Result<Self, PreprocessError> {
        let default_transformer = env::var_os(TRANSFORMER_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TRANSFORMER));
        Self::with_default_transformer(positionals, default_transformer, verbose)
    }

    fn with_default_transformer(
        positionals: Vec<PathBuf>,
        default_transformer: PathBuf,
        verbose: bool,
    ) -> Result<Self, PreprocessError> {
        let (transformer, input, output) = match <[PathBuf; 2]>::try_from(positionals) {
            Ok([input, output]) => (default_transformer, input, output),
            Err(positionals) => match <[PathBuf; 3]>::try_from(positionals) {
                Ok([transformer, input, output]) => (transformer, input, output),
                Err(positionals) => {
                    return Err(PreprocessError::Usage {
                        count: positionals.len(),
                    })
                }
            },
        };
        Ok(Self {
            transformer,
            input,
            output,
            verbose,
        })
    }
}
