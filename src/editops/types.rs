use std::fmt;

/// Tag of a single stored edit operation.
///
/// `equal` never appears here: a run of unchanged elements carries no edit
/// information and is dropped during validation. Raw input that still
/// contains equal entries uses [`BlockTag`](crate::opcodes::BlockTag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditTag {
    Replace,
    Insert,
    Delete,
}

impl EditTag {
    /// The tag describing the reverse transformation.
    pub fn inverse(self) -> Self {
        match self {
            EditTag::Replace => EditTag::Replace,
            EditTag::Insert => EditTag::Delete,
            EditTag::Delete => EditTag::Insert,
        }
    }
}

impl fmt::Display for EditTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditTag::Replace => write!(f, "replace"),
            EditTag::Insert => write!(f, "insert"),
            EditTag::Delete => write!(f, "delete"),
        }
    }
}

/// One edit operation tied to one position pair.
///
/// `replace`: the element at `src_pos` corresponds to the element at
/// `dest_pos`. `delete`: the element at `src_pos` is removed, `dest_pos`
/// records the destination cursor at that point. `insert`: the element at
/// `dest_pos` is introduced, `src_pos` records the source cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditOp {
    pub tag: EditTag,
    pub src_pos: usize,
    pub dest_pos: usize,
}

impl EditOp {
    pub fn new(tag: EditTag, src_pos: usize, dest_pos: usize) -> Self {
        EditOp {
            tag,
            src_pos,
            dest_pos,
        }
    }

    /// Positional representation for tuple-based interfaces.
    pub fn to_tuple(self) -> (EditTag, usize, usize) {
        (self.tag, self.src_pos, self.dest_pos)
    }
}

impl From<(EditTag, usize, usize)> for EditOp {
    fn from((tag, src_pos, dest_pos): (EditTag, usize, usize)) -> Self {
        EditOp::new(tag, src_pos, dest_pos)
    }
}

impl From<EditOp> for (EditTag, usize, usize) {
    fn from(op: EditOp) -> Self {
        op.to_tuple()
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.tag, self.src_pos, self.dest_pos)
    }
}
