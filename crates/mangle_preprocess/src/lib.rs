// crates/mangle_preprocess/src/lib.rs

//! Rewrites `_mangle_(name, "symbol")` markers in a source file with the
//! output of an external mangler.
//!
//! The external tool is run once per distinct `symbol`; repeated markers reuse
//! the first result. Text outside markers is copied byte for byte, and the
//! output file is only written once every marker has been transformed.
//!
//! ```no_run
//! use std::path::Path;
//! use mangle_preprocess::{process_file, ProcessTransformer};
//!
//! let mangler = ProcessTransformer::new("./mangler");
//! let report = process_file(Path::new("core.pre.h"), Path::new("core.h"), &mangler)?;
//! println!("{} markers, {} mangler calls", report.occurrences, report.invocations);
//! # Ok::<(), mangle_preprocess::PreprocessError>(())
//! ```

pub mod config;
pub mod error;
pub mod marker;
pub mod processor;
pub mod substitutor;
pub mod transformer;

pub use config::PreprocessConfig;
pub use error::{PreprocessError, TransformError};
pub use marker::{find_markers, MarkerOccurrence, MARKER_TOKEN};
pub use processor::process_file;
pub use substitutor::{substitute_markers, Substitution, SubstitutionReport, Substitutor};
pub use transformer::{ProcessTransformer, Transformer};
