// crates/mangle_preprocess/src/processor.rs

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::PreprocessError;
use crate::substitutor::{substitute_markers, SubstitutionReport};
use crate::transformer::Transformer;

/// Reads `input`, substitutes every marker through `transformer`, and writes
/// the result to `output`, overwriting whatever was there.
///
/// Nothing is written unless every marker was transformed. The output path is
/// opened like any other file, so symlinks are written through.
pub fn process_file<T: Transformer + ?Sized>(
    input: &Path,
    output: &Path,
    transformer: &T,
) -> Result<SubstitutionReport, PreprocessError> {
    let document = fs::read_to_string(input).map_err(|source| PreprocessError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let substitution = substitute_markers(&document, transformer)?;
    if substitution.report.occurrences == 0 {
        debug!("No markers in {}; copying through", input.display());
    }

    fs::write(output, &substitution.text).map_err(|source| PreprocessError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        "{} -> {}: {} marker(s), {} transformer call(s)",
        input.display(),
        output.display(),
        substitution.report.occurrences,
        substitution.report.invocations
    );
    Ok(substitution.report)
}
