use crate::opcodes::BlockTag;
use thiserror::Error;

/// Validation failure for raw edit operations or raw blocks.
///
/// Raised synchronously by the validating constructors; there is no partial
/// acceptance. Conversions and inversion operate on already validated
/// scripts and never fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScriptError {
    #[error("operation at ({src_pos}, {dest_pos}) exceeds the sequence lengths ({src_len}, {dest_len})")]
    OutOfBounds {
        src_pos: usize,
        dest_pos: usize,
        src_len: usize,
        dest_len: usize,
    },

    #[error("{tag} operation not permitted at sequence boundary ({src_pos}, {dest_pos})")]
    BoundaryTagMismatch {
        tag: BlockTag,
        src_pos: usize,
        dest_pos: usize,
    },

    #[error("operation {index} goes backwards on at least one axis")]
    OutOfOrder { index: usize },

    #[error("duplicated operation at ({src_pos}, {dest_pos})")]
    DuplicateOperation { src_pos: usize, dest_pos: usize },

    #[error("block {index} has a span inconsistent with its tag")]
    MalformedBlockShape { index: usize },

    #[error("blocks must start at (0, 0) and end at the sequence ends, found ({src}, {dest})")]
    BoundaryCoverageMismatch { src: usize, dest: usize },

    #[error("block {index} does not continue exactly where the previous block ended")]
    DiscontinuousCoverage { index: usize },
}
