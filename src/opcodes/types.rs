use crate::editops::EditTag;
use std::fmt;

/// Tag of a block, and of raw per-element input before validation.
///
/// Unlike [`EditTag`], `equal` is representable: a block script must cover
/// both sequences completely, so unchanged ranges appear explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockTag {
    Equal,
    Replace,
    Insert,
    Delete,
}

impl BlockTag {
    /// The tag describing the reverse transformation.
    pub fn inverse(self) -> Self {
        match self {
            BlockTag::Equal => BlockTag::Equal,
            BlockTag::Replace => BlockTag::Replace,
            BlockTag::Insert => BlockTag::Delete,
            BlockTag::Delete => BlockTag::Insert,
        }
    }

    /// The per-element tag, or `None` for `equal` which stores no edit.
    pub fn edit_tag(self) -> Option<EditTag> {
        match self {
            BlockTag::Equal => None,
            BlockTag::Replace => Some(EditTag::Replace),
            BlockTag::Insert => Some(EditTag::Insert),
            BlockTag::Delete => Some(EditTag::Delete),
        }
    }
}

impl From<EditTag> for BlockTag {
    fn from(tag: EditTag) -> Self {
        match tag {
            EditTag::Replace => BlockTag::Replace,
            EditTag::Insert => BlockTag::Insert,
            EditTag::Delete => BlockTag::Delete,
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockTag::Equal => write!(f, "equal"),
            BlockTag::Replace => write!(f, "replace"),
            BlockTag::Insert => write!(f, "insert"),
            BlockTag::Delete => write!(f, "delete"),
        }
    }
}

/// One edit operation spanning a contiguous range on both sequences.
///
/// `equal`/`replace` ranges have the same positive length on both axes;
/// `insert` spans only the destination (`src_start == src_end`); `delete`
/// spans only the source (`dest_start == dest_end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode {
    pub tag: BlockTag,
    pub src_start: usize,
    pub src_end: usize,
    pub dest_start: usize,
    pub dest_end: usize,
}

impl Opcode {
    pub fn new(
        tag: BlockTag,
        src_start: usize,
        src_end: usize,
        dest_start: usize,
        dest_end: usize,
    ) -> Self {
        Opcode {
            tag,
            src_start,
            src_end,
            dest_start,
            dest_end,
        }
    }

    /// Positional representation for tuple-based interfaces.
    pub fn to_tuple(self) -> (BlockTag, usize, usize, usize, usize) {
        (
            self.tag,
            self.src_start,
            self.src_end,
            self.dest_start,
            self.dest_end,
        )
    }
}

impl From<(BlockTag, usize, usize, usize, usize)> for Opcode {
    fn from(
        (tag, src_start, src_end, dest_start, dest_end): (BlockTag, usize, usize, usize, usize),
    ) -> Self {
        Opcode::new(tag, src_start, src_end, dest_start, dest_end)
    }
}

impl From<Opcode> for (BlockTag, usize, usize, usize, usize) {
    fn from(block: Opcode) -> Self {
        block.to_tuple()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}..{}, {}..{})",
            self.tag, self.src_start, self.src_end, self.dest_start, self.dest_end
        )
    }
}
