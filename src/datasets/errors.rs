use thiserror::Error;

/// A label outside `0..max` was looked up in a label name table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("label {found} is out of range for {max} classes")]
pub struct LabelOrdinalError {
    pub found: usize,
    pub max: usize,
}
