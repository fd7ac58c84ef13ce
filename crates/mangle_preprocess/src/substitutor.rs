// crates/mangle_preprocess/src/substitutor.rs

use std::collections::HashMap;

use log::debug;

use crate::error::TransformError;
use crate::marker::find_markers;
use crate::transformer::Transformer;

/// Counters for a single substitution run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// Markers replaced.
    pub occurrences: usize,
    /// Transformer calls made, one per distinct argument.
    pub invocations: usize,
}

/// A rewritten document together with its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    pub report: SubstitutionReport,
}

/// Replaces markers with transformer output, calling the transformer at most
/// once per distinct argument for as long as this value lives.
pub struct Substitutor<'t, T: Transformer + ?Sized> {
    transformer: &'t T,
    cache: HashMap<String, String>,
    report: SubstitutionReport,
}

impl<'t, T: Transformer + ?Sized> Substitutor<'t, T> {
    pub fn new(transformer: &'t T) -> Self {
        Self {
            transformer,
            cache: HashMap::new(),
            report: SubstitutionReport::default(),
        }
    }

    /// Rewrites `document`, replacing each whole marker span with the
    /// transformed argument. Text outside markers is copied unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first transformer error; no partial document is produced.
    pub fn substitute(&mut self, document: &str) -> Result<String, TransformError> {
        let mut output = String::with_capacity(document.len());
        let mut last_end = 0;

        for marker in find_markers(document) {
            output.push_str(&document[last_end..marker.span.start]);
            output.push_str(self.resolve(marker.argument)?);
            last_end = marker.span.end;
            self.report.occurrences += 1;
        }
        output.push_str(&document[last_end..]);

        Ok(output)
    }

    pub fn report(&self) -> SubstitutionReport {
        self.report
    }

    fn resolve(&mut self, argument: &str) -> Result<&str, TransformError> {
        if self.cache.contains_key(argument) {
            debug!("Cache hit for {:?}", argument);
        } else {
            debug!("Invoking transformer for {:?}", argument);
            let replacement = self.transformer.transform(argument)?;
            debug!("{:?} -> {:?}", argument, replacement);
            self.report.invocations += 1;
            self.cache.insert(argument.to_string(), replacement);
        }
        Ok(self
            .cache
            .get(argument)
            .map(String::as_str)
            .unwrap_or_default())
    }
}

/// Public API: one-shot substitution over a whole document with a fresh cache.
pub fn substitute_markers<T: Transformer + ?Sized>(
    document: &str,
    transformer: &T,
) -> Result<Substitution, TransformError> {
    let mut substitutor = Substitutor::new(transformer);
    let text = substitutor.substitute(document)?;
    Ok(Substitution {
        text,
        report: substitutor.report(),
    })
}
