use std::path::Path;

use crate::problem::collection_problem::CollectionProblem;

pub trait DatasetLoader {
    fn load<P: AsRef<Path>>(&self, dir: P) -> Result<CollectionProblem, anyhow::Error>;
}

/// Errors raised while reading tabular input. The optimizer core assumes
/// well-typed data; everything malformed is rejected here at the loading
/// seam.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("empty file, expected a header row")]
    EmptyFile,

    #[error("missing column `{0}` in header")]
    MissingColumn(String),

    #[error("line {line}: invalid numeric value `{value}`")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MissingFields {
        line: usize,
        expected: usize,
        found: usize,
    },
}
