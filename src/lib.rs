//! Edit-script representation and conversion.
//!
//! An edit script describes how one ordered sequence is transformed into
//! another. This crate owns the two canonical representations and the
//! operations over them:
//!
//! * [`EditScript`]: fine-grained, one operation per element.
//! * [`OpcodeScript`]: block-grained, maximal same-tag ranges covering both
//!   sequences completely.
//!
//! Scripts are only ever constructed through the validating constructors (or
//! by conversion/inversion from an already validated script) and are
//! immutable afterwards. Computing the operations in the first place is the
//! job of an external scoring engine; this crate consumes its output.
//!
//! ```
//! use editscript::{BlockTag, EditScript, MatchingBlock};
//!
//! // "spam" -> "park"
//! let script = EditScript::new(
//!     &[
//!         (BlockTag::Delete, 0, 0),
//!         (BlockTag::Replace, 3, 2),
//!         (BlockTag::Insert, 4, 3),
//!     ],
//!     4,
//!     4,
//! )?;
//!
//! let blocks = script.as_opcodes();
//! assert_eq!(blocks.len(), 4);
//! assert_eq!(blocks.as_editops(), script);
//! assert_eq!(
//!     script.as_matching_blocks(),
//!     vec![MatchingBlock::new(1, 0, 2), MatchingBlock::new(4, 4, 0)]
//! );
//! # Ok::<(), editscript::ScriptError>(())
//! ```

pub mod alignment;
pub mod editops;
pub mod error;
pub mod opcodes;

pub use alignment::{MatchingBlock, ScoreAlignment};
pub use editops::{EditOp, EditScript, EditTag};
pub use error::ScriptError;
pub use opcodes::{BlockTag, Opcode, OpcodeScript};
