mod types;
pub use types::*;

use crate::alignment::MatchingBlock;
use crate::editops::{EditOp, EditScript, EditTag};
use crate::error::ScriptError;
use std::fmt;

/// Validated block-grained edit script: maximal contiguous same-tag ranges
/// that exactly tile `[0, src_len] x [0, dest_len]` in reading order.
///
/// The first block starts at `(0, 0)`, every block starts where the previous
/// one ended on both axes, the last block ends at `(src_len, dest_len)`, and
/// no two adjacent blocks share a tag. Instances are immutable; the lengths
/// are fixed at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeScript {
    blocks: Vec<Opcode>,
    src_len: usize,
    dest_len: usize,
}

impl OpcodeScript {
    /// Validates raw `(tag, src_start, src_end, dest_start, dest_end)`
    /// five-tuples into a script in canonical maximal-block form.
    ///
    /// Adjacent same-tag entries whose coordinates chain exactly are merged
    /// into one block. An empty input list is valid only for two empty
    /// sequences; with any other lengths there is no block left to reach the
    /// required boundaries.
    pub fn new(
        raw: &[(BlockTag, usize, usize, usize, usize)],
        src_len: usize,
        dest_len: usize,
    ) -> Result<Self, ScriptError> {
        let mut blocks: Vec<Opcode> = Vec::with_capacity(raw.len());
        for (index, &(tag, src_start, src_end, dest_start, dest_end)) in raw.iter().enumerate() {
            if src_end > src_len || dest_end > dest_len {
                return Err(ScriptError::OutOfBounds {
                    src_pos: src_end,
                    dest_pos: dest_end,
                    src_len,
                    dest_len,
                });
            }
            if src_end < src_start || dest_end < dest_start {
                return Err(ScriptError::MalformedBlockShape { index });
            }

            let well_shaped = match tag {
                BlockTag::Equal | BlockTag::Replace => {
                    src_end - src_start == dest_end - dest_start && src_start < src_end
                }
                BlockTag::Insert => src_start == src_end && dest_start < dest_end,
                BlockTag::Delete => src_start < src_end && dest_start == dest_end,
            };
            if !well_shaped {
                return Err(ScriptError::MalformedBlockShape { index });
            }

            // merge into the previous block when tag and coordinates chain
            if let Some(prev) = blocks.last_mut() {
                if prev.tag == tag && prev.src_end == src_start && prev.dest_end == dest_start {
                    prev.src_end = src_end;
                    prev.dest_end = dest_end;
                    continue;
                }
            }
            blocks.push(Opcode::new(tag, src_start, src_end, dest_start, dest_end));
        }

        if blocks.is_empty() {
            if src_len != 0 || dest_len != 0 {
                return Err(ScriptError::DiscontinuousCoverage { index: 0 });
            }
            return Ok(OpcodeScript {
                blocks,
                src_len,
                dest_len,
            });
        }

        let first = blocks[0];
        if first.src_start != 0 || first.dest_start != 0 {
            return Err(ScriptError::BoundaryCoverageMismatch {
                src: first.src_start,
                dest: first.dest_start,
            });
        }
        let last = blocks[blocks.len() - 1];
        if last.src_end != src_len || last.dest_end != dest_len {
            return Err(ScriptError::BoundaryCoverageMismatch {
                src: last.src_end,
                dest: last.dest_end,
            });
        }
        for i in 1..blocks.len() {
            if blocks[i].src_start != blocks[i - 1].src_end
                || blocks[i].dest_start != blocks[i - 1].dest_end
            {
                return Err(ScriptError::DiscontinuousCoverage { index: i });
            }
        }

        Ok(OpcodeScript {
            blocks,
            src_len,
            dest_len,
        })
    }

    pub(crate) fn from_parts(blocks: Vec<Opcode>, src_len: usize, dest_len: usize) -> Self {
        OpcodeScript {
            blocks,
            src_len,
            dest_len,
        }
    }

    pub fn blocks(&self) -> &[Opcode] {
        &self.blocks
    }

    pub fn src_len(&self) -> usize {
        self.src_len
    }

    pub fn dest_len(&self) -> usize {
        self.dest_len
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Opcode> {
        self.blocks.iter()
    }

    /// Expands to the fine-grained form.
    ///
    /// `equal` blocks contribute nothing. A `replace` block expands to one
    /// operation per element, advancing on both axes; `insert` and `delete`
    /// blocks expand with the untouched axis pinned to the block start.
    pub fn as_editops(&self) -> EditScript {
        let mut ops = Vec::new();
        for block in &self.blocks {
            match block.tag {
                BlockTag::Equal => {}
                BlockTag::Replace => {
                    for j in 0..block.src_end - block.src_start {
                        ops.push(EditOp::new(
                            EditTag::Replace,
                            block.src_start + j,
                            block.dest_start + j,
                        ));
                    }
                }
                BlockTag::Insert => {
                    for j in 0..block.dest_end - block.dest_start {
                        ops.push(EditOp::new(
                            EditTag::Insert,
                            block.src_start,
                            block.dest_start + j,
                        ));
                    }
                }
                BlockTag::Delete => {
                    for j in 0..block.src_end - block.src_start {
                        ops.push(EditOp::new(
                            EditTag::Delete,
                            block.src_start + j,
                            block.dest_start,
                        ));
                    }
                }
            }
        }
        EditScript::from_parts(ops, self.src_len, self.dest_len)
    }

    /// Extracts the runs of unchanged elements, terminated by the
    /// `(src_len, dest_len, 0)` sentinel.
    pub fn as_matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut matching = Vec::new();
        for block in &self.blocks {
            if block.tag == BlockTag::Equal {
                let size = usize::min(
                    block.src_end - block.src_start,
                    block.dest_end - block.dest_start,
                );
                if size > 0 {
                    matching.push(MatchingBlock::new(block.src_start, block.dest_start, size));
                }
            }
        }
        matching.push(MatchingBlock::new(self.src_len, self.dest_len, 0));
        matching
    }

    /// The symmetric script turning the destination back into the source:
    /// lengths and coordinate pairs swap, inserts and deletes trade places.
    pub fn inverse(&self) -> OpcodeScript {
        let blocks = self
            .blocks
            .iter()
            .map(|block| {
                Opcode::new(
                    block.tag.inverse(),
                    block.dest_start,
                    block.dest_end,
                    block.src_start,
                    block.src_end,
                )
            })
            .collect();
        OpcodeScript {
            blocks,
            src_len: self.dest_len,
            dest_len: self.src_len,
        }
    }
}

impl<'a> IntoIterator for &'a OpcodeScript {
    type Item = &'a Opcode;
    type IntoIter = std::slice::Iter<'a, Opcode>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl fmt::Display for OpcodeScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{block}")?;
        }
        write!(f, "] src_len={} dest_len={}", self.src_len, self.dest_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spam_park() -> OpcodeScript {
        OpcodeScript::new(
            &[
                (BlockTag::Delete, 0, 1, 0, 0),
                (BlockTag::Equal, 1, 3, 0, 2),
                (BlockTag::Replace, 3, 4, 2, 3),
                (BlockTag::Insert, 4, 4, 3, 4),
            ],
            4,
            4,
        )
        .unwrap()
    }

    /// Random valid block lists, built as a cursor walk. Adjacent same-tag
    /// blocks are produced on purpose so validation exercises merging.
    fn valid_blocks() -> impl Strategy<Value = (Vec<(BlockTag, usize, usize, usize, usize)>, usize, usize)>
    {
        prop::collection::vec((0..4u8, 1..5usize), 0..30).prop_map(|moves| {
            let mut raw = Vec::new();
            let mut src_pos = 0;
            let mut dest_pos = 0;
            for (kind, len) in moves {
                let (tag, src_end, dest_end) = match kind {
                    0 => (BlockTag::Equal, src_pos + len, dest_pos + len),
                    1 => (BlockTag::Replace, src_pos + len, dest_pos + len),
                    2 => (BlockTag::Insert, src_pos, dest_pos + len),
                    _ => (BlockTag::Delete, src_pos + len, dest_pos),
                };
                raw.push((tag, src_pos, src_end, dest_pos, dest_end));
                src_pos = src_end;
                dest_pos = dest_end;
            }
            (raw, src_pos, dest_pos)
        })
    }

    proptest! {
        #[test]
        fn test_canonical_idempotence((raw, src_len, dest_len) in valid_blocks()) {
            let script = OpcodeScript::new(&raw, src_len, dest_len).unwrap();
            // the validator already merged; converting down and back up must
            // reproduce the canonical form exactly
            prop_assert_eq!(script.as_editops().as_opcodes(), script.clone());
            for pair in script.blocks().windows(2) {
                prop_assert_ne!(pair[1].tag, pair[0].tag);
            }
        }

        #[test]
        fn test_double_inverse((raw, src_len, dest_len) in valid_blocks()) {
            let script = OpcodeScript::new(&raw, src_len, dest_len).unwrap();
            prop_assert_eq!(script.inverse().inverse(), script);
        }

        #[test]
        fn test_matching_blocks_end_in_sentinel((raw, src_len, dest_len) in valid_blocks()) {
            let script = OpcodeScript::new(&raw, src_len, dest_len).unwrap();
            let blocks = script.as_matching_blocks();
            let last = blocks[blocks.len() - 1];
            prop_assert_eq!(last, MatchingBlock::new(src_len, dest_len, 0));
            for block in &blocks[..blocks.len() - 1] {
                prop_assert!(block.size > 0);
            }
        }
    }

    #[test]
    fn test_spam_park_as_editops() {
        let script = spam_park().as_editops();
        assert_eq!(
            script.ops(),
            [
                EditOp::new(EditTag::Delete, 0, 0),
                EditOp::new(EditTag::Replace, 3, 2),
                EditOp::new(EditTag::Insert, 4, 3),
            ]
        );
    }

    #[test]
    fn test_spam_park_inverse() {
        let inverse = spam_park().inverse();
        assert_eq!(
            inverse.blocks(),
            [
                Opcode::new(BlockTag::Insert, 0, 0, 0, 1),
                Opcode::new(BlockTag::Equal, 0, 2, 1, 3),
                Opcode::new(BlockTag::Replace, 2, 3, 3, 4),
                Opcode::new(BlockTag::Delete, 3, 4, 4, 4),
            ]
        );
    }

    #[test]
    fn test_spam_park_matching_blocks() {
        assert_eq!(
            spam_park().as_matching_blocks(),
            vec![MatchingBlock::new(1, 0, 2), MatchingBlock::new(4, 4, 0)]
        );
    }

    #[test]
    fn test_adjacent_same_tag_blocks_merge() {
        let script = OpcodeScript::new(
            &[
                (BlockTag::Replace, 0, 1, 0, 1),
                (BlockTag::Replace, 1, 2, 1, 2),
            ],
            2,
            2,
        )
        .unwrap();
        assert_eq!(script.blocks(), [Opcode::new(BlockTag::Replace, 0, 2, 0, 2)]);
    }

    #[test]
    fn test_same_tag_blocks_with_gap_not_merged() {
        // same tag, but the coordinates do not chain
        let result = OpcodeScript::new(
            &[
                (BlockTag::Delete, 0, 1, 0, 0),
                (BlockTag::Delete, 2, 3, 0, 0),
            ],
            3,
            0,
        );
        assert_eq!(result, Err(ScriptError::DiscontinuousCoverage { index: 1 }));
    }

    #[test]
    fn test_empty_input_with_empty_sequences() {
        let script = OpcodeScript::new(&[], 0, 0).unwrap();
        assert!(script.is_empty());
        assert_eq!(
            script.as_matching_blocks(),
            vec![MatchingBlock::new(0, 0, 0)]
        );
    }

    #[test]
    fn test_empty_input_with_nonzero_lengths_rejected() {
        let result = OpcodeScript::new(&[], 3, 2);
        assert_eq!(result, Err(ScriptError::DiscontinuousCoverage { index: 0 }));
    }

    #[test]
    fn test_block_past_end_rejected() {
        let result = OpcodeScript::new(&[(BlockTag::Equal, 0, 5, 0, 5)], 4, 4);
        assert_eq!(
            result,
            Err(ScriptError::OutOfBounds {
                src_pos: 5,
                dest_pos: 5,
                src_len: 4,
                dest_len: 4,
            })
        );
    }

    #[test]
    fn test_unbalanced_equal_block_rejected() {
        let result = OpcodeScript::new(&[(BlockTag::Equal, 0, 2, 0, 3)], 2, 3);
        assert_eq!(result, Err(ScriptError::MalformedBlockShape { index: 0 }));
    }

    #[test]
    fn test_zero_length_replace_rejected() {
        let result = OpcodeScript::new(&[(BlockTag::Replace, 0, 0, 0, 0)], 0, 0);
        assert_eq!(result, Err(ScriptError::MalformedBlockShape { index: 0 }));
    }

    #[test]
    fn test_insert_spanning_source_rejected() {
        let result = OpcodeScript::new(&[(BlockTag::Insert, 0, 1, 0, 1)], 1, 1);
        assert_eq!(result, Err(ScriptError::MalformedBlockShape { index: 0 }));
    }

    #[test]
    fn test_reversed_range_rejected() {
        let result = OpcodeScript::new(&[(BlockTag::Delete, 2, 1, 0, 0)], 4, 4);
        assert_eq!(result, Err(ScriptError::MalformedBlockShape { index: 0 }));
    }

    #[test]
    fn test_wrong_start_rejected() {
        let result = OpcodeScript::new(&[(BlockTag::Equal, 1, 4, 1, 4)], 4, 4);
        assert_eq!(
            result,
            Err(ScriptError::BoundaryCoverageMismatch { src: 1, dest: 1 })
        );
    }

    #[test]
    fn test_wrong_end_rejected() {
        let result = OpcodeScript::new(&[(BlockTag::Equal, 0, 3, 0, 3)], 4, 4);
        assert_eq!(
            result,
            Err(ScriptError::BoundaryCoverageMismatch { src: 3, dest: 3 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            spam_park().to_string(),
            "[delete(0..1, 0..0), equal(1..3, 0..2), replace(3..4, 2..3), insert(4..4, 3..4)] \
             src_len=4 dest_len=4"
        );
    }
}
