mod types;
pub use types::*;

use crate::alignment::MatchingBlock;
use crate::error::ScriptError;
use crate::opcodes::{BlockTag, Opcode, OpcodeScript};
use std::fmt;

/// Validated fine-grained edit script: an ordered list of per-element
/// operations turning the source sequence into the destination sequence.
///
/// Operations are non-decreasing in `(src_pos, dest_pos)` with no
/// duplicates, every position lies within the declared lengths, and
/// boundary positions only carry the one tag that is meaningful there.
/// Instances are immutable; the lengths are fixed at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditScript {
    ops: Vec<EditOp>,
    src_len: usize,
    dest_len: usize,
}

impl EditScript {
    /// Validates raw `(tag, src_pos, dest_pos)` triplets into a script.
    ///
    /// `equal` entries are bounds-checked like any other entry and then
    /// dropped, since a run of unchanged elements carries no edit
    /// information.
    ///
    /// # Examples
    ///
    /// ```
    /// use editscript::{BlockTag, EditScript};
    ///
    /// // "spam" -> "park"
    /// let script = EditScript::new(
    ///     &[
    ///         (BlockTag::Delete, 0, 0),
    ///         (BlockTag::Replace, 3, 2),
    ///         (BlockTag::Insert, 4, 3),
    ///     ],
    ///     4,
    ///     4,
    /// )?;
    /// assert_eq!(script.len(), 3);
    /// # Ok::<(), editscript::ScriptError>(())
    /// ```
    pub fn new(
        raw: &[(BlockTag, usize, usize)],
        src_len: usize,
        dest_len: usize,
    ) -> Result<Self, ScriptError> {
        let mut ops: Vec<EditOp> = Vec::with_capacity(raw.len());
        for &(tag, src_pos, dest_pos) in raw {
            if src_pos > src_len || dest_pos > dest_len {
                return Err(ScriptError::OutOfBounds {
                    src_pos,
                    dest_pos,
                    src_len,
                    dest_len,
                });
            }
            // past the end of the source nothing can be deleted or replaced,
            // and symmetrically on the destination side
            if src_pos == src_len && tag != BlockTag::Insert {
                return Err(ScriptError::BoundaryTagMismatch {
                    tag,
                    src_pos,
                    dest_pos,
                });
            }
            if dest_pos == dest_len && tag != BlockTag::Delete {
                return Err(ScriptError::BoundaryTagMismatch {
                    tag,
                    src_pos,
                    dest_pos,
                });
            }

            let Some(tag) = tag.edit_tag() else {
                continue;
            };
            ops.push(EditOp::new(tag, src_pos, dest_pos));
        }

        for i in 1..ops.len() {
            if ops[i].src_pos < ops[i - 1].src_pos || ops[i].dest_pos < ops[i - 1].dest_pos {
                return Err(ScriptError::OutOfOrder { index: i });
            }
            if ops[i].src_pos == ops[i - 1].src_pos && ops[i].dest_pos == ops[i - 1].dest_pos {
                return Err(ScriptError::DuplicateOperation {
                    src_pos: ops[i].src_pos,
                    dest_pos: ops[i].dest_pos,
                });
            }
        }

        Ok(EditScript {
            ops,
            src_len,
            dest_len,
        })
    }

    pub(crate) fn from_parts(ops: Vec<EditOp>, src_len: usize, dest_len: usize) -> Self {
        EditScript {
            ops,
            src_len,
            dest_len,
        }
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn src_len(&self) -> usize {
        self.src_len
    }

    pub fn dest_len(&self) -> usize {
        self.dest_len
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.ops.iter()
    }

    /// Converts to the canonical block-grained form.
    ///
    /// Walks a `(src, dest)` cursor from `(0, 0)`, emitting an `equal` block
    /// for every gap the operations skip over and one maximal block per run
    /// of same-tag operations that chain contiguously from the cursor. A
    /// trailing `equal` block closes the script when the last operation
    /// stops short of the sequence ends.
    pub fn as_opcodes(&self) -> OpcodeScript {
        let mut blocks = Vec::new();
        let mut src_pos = 0;
        let mut dest_pos = 0;
        let mut i = 0;
        while i < self.ops.len() {
            let op = self.ops[i];
            if src_pos < op.src_pos || dest_pos < op.dest_pos {
                blocks.push(Opcode::new(
                    BlockTag::Equal,
                    src_pos,
                    op.src_pos,
                    dest_pos,
                    op.dest_pos,
                ));
                src_pos = op.src_pos;
                dest_pos = op.dest_pos;
            }

            let src_begin = src_pos;
            let dest_begin = dest_pos;
            let tag = op.tag;
            while i < self.ops.len()
                && self.ops[i].tag == tag
                && src_pos == self.ops[i].src_pos
                && dest_pos == self.ops[i].dest_pos
            {
                match tag {
                    EditTag::Replace => {
                        src_pos += 1;
                        dest_pos += 1;
                    }
                    EditTag::Insert => dest_pos += 1,
                    EditTag::Delete => src_pos += 1,
                }
                i += 1;
            }
            blocks.push(Opcode::new(
                tag.into(),
                src_begin,
                src_pos,
                dest_begin,
                dest_pos,
            ));
        }

        if src_pos < self.src_len || dest_pos < self.dest_len {
            blocks.push(Opcode::new(
                BlockTag::Equal,
                src_pos,
                self.src_len,
                dest_pos,
                self.dest_len,
            ));
        }

        OpcodeScript::from_parts(blocks, self.src_len, self.dest_len)
    }

    /// Extracts the runs of unchanged elements, terminated by the
    /// `(src_len, dest_len, 0)` sentinel.
    pub fn as_matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut blocks = Vec::new();
        let mut src_pos = 0;
        let mut dest_pos = 0;
        for op in &self.ops {
            if src_pos < op.src_pos || dest_pos < op.dest_pos {
                let size = usize::min(op.src_pos - src_pos, op.dest_pos - dest_pos);
                if size > 0 {
                    blocks.push(MatchingBlock::new(src_pos, dest_pos, size));
                }
                src_pos = op.src_pos;
                dest_pos = op.dest_pos;
            }

            match op.tag {
                EditTag::Replace => {
                    src_pos += 1;
                    dest_pos += 1;
                }
                EditTag::Insert => dest_pos += 1,
                EditTag::Delete => src_pos += 1,
            }
        }

        if src_pos < self.src_len || dest_pos < self.dest_len {
            let size = usize::min(self.src_len - src_pos, self.dest_len - dest_pos);
            if size > 0 {
                blocks.push(MatchingBlock::new(src_pos, dest_pos, size));
            }
        }

        blocks.push(MatchingBlock::new(self.src_len, self.dest_len, 0));
        blocks
    }

    /// The symmetric script turning the destination back into the source:
    /// lengths and coordinates swap, inserts and deletes trade places.
    pub fn inverse(&self) -> EditScript {
        let ops = self
            .ops
            .iter()
            .map(|op| EditOp::new(op.tag.inverse(), op.dest_pos, op.src_pos))
            .collect();
        EditScript {
            ops,
            src_len: self.dest_len,
            dest_len: self.src_len,
        }
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl fmt::Display for EditScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{op}")?;
        }
        write!(f, "] src_len={} dest_len={}", self.src_len, self.dest_len)
    }
}
