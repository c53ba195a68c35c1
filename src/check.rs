//! Digest checking with per-character mismatch reporting

use std::fmt;

use tracing::{debug, warn};

use crate::error::HarnessError;
use crate::vectors::Vector;
use shadigest_core::{digest, Algorithm};

/// Outcome of running one vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub algorithm: Algorithm,
    /// Printable message (see [`Vector::label`])
    pub message: String,
    /// Computed digest
    pub digest: String,
    /// Expected digest
    pub expected: String,
    /// Character positions at which `digest` and `expected` differ
    pub mismatches: Vec<usize>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// `^` under every mismatching position, spaces elsewhere
    pub fn marker_line(&self) -> String {
        let width = self.mismatches.last().map_or(0, |&last| last + 1);
        let mut line = vec![' '; width];
        for &pos in &self.mismatches {
            line[pos] = '^';
        }
        line.into_iter().collect()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "message : '{}'", self.message)?;
        writeln!(f, "hash    : {}", self.digest)?;
        write!(f, "expected: {}", self.expected)?;
        if !self.passed() {
            write!(f, "\nerrors  : {}", self.marker_line())?;
        }
        Ok(())
    }
}

/// Positions where `a` and `b` differ, including every position past the
/// end of the shorter one.
pub fn mismatch_positions(a: &str, b: &str) -> Vec<usize> {
    let a = a.as_bytes();
    let b = b.as_bytes();

    (0..a.len().max(b.len()))
        .filter(|&i| a.get(i) != b.get(i))
        .collect()
}

/// Hash the vector's message and compare with its expected digest
pub fn check(vector: &Vector) -> Result<CheckReport, HarnessError> {
    let algorithm: Algorithm = vector.algorithm.parse()?;
    let message = vector.message_bytes()?;

    let computed = digest(&message, algorithm);
    let mismatches = mismatch_positions(&computed, &vector.expected);

    let report = CheckReport {
        algorithm,
        message: vector.label(),
        digest: computed,
        expected: vector.expected.clone(),
        mismatches,
    };

    if report.passed() {
        debug!(%algorithm, message = %report.message, "vector passed");
    } else {
        warn!(
            %algorithm,
            message = %report.message,
            mismatches = report.mismatches.len(),
            "vector failed"
        );
    }

    Ok(report)
}

/// Run every vector, stopping at the first one that cannot be evaluated
pub fn check_all(vectors: &[Vector]) -> Result<Vec<CheckReport>, HarnessError> {
    vectors.iter().map(check).collect()
}
