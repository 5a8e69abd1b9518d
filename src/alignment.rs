use std::fmt;

/// A run of `size` unchanged elements starting at `a` in the source and `b`
/// in the destination.
///
/// Derived matching-block sequences always end with the zero-length sentinel
/// `(src_len, dest_len, 0)`; every block before it has `size > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

impl MatchingBlock {
    pub fn new(a: usize, b: usize, size: usize) -> Self {
        MatchingBlock { a, b, size }
    }

    /// Positional representation for tuple-based interfaces.
    pub fn to_tuple(self) -> (usize, usize, usize) {
        (self.a, self.b, self.size)
    }
}

impl From<(usize, usize, usize)> for MatchingBlock {
    fn from((a, b, size): (usize, usize, usize)) -> Self {
        MatchingBlock::new(a, b, size)
    }
}

impl From<MatchingBlock> for (usize, usize, usize) {
    fn from(block: MatchingBlock) -> Self {
        block.to_tuple()
    }
}

impl fmt::Display for MatchingBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.a, self.b, self.size)
    }
}

/// Record that a score was computed between `src[src_start..src_end]` and
/// `dest[dest_start..dest_end]`.
///
/// Produced by an external scoring engine and carried through unmodified;
/// this crate never interprets the score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreAlignment {
    pub score: f64,
    pub src_start: usize,
    pub src_end: usize,
    pub dest_start: usize,
    pub dest_end: usize,
}

impl ScoreAlignment {
    pub fn new(
        score: f64,
        src_start: usize,
        src_end: usize,
        dest_start: usize,
        dest_end: usize,
    ) -> Self {
        ScoreAlignment {
            score,
            src_start,
            src_end,
            dest_start,
            dest_end,
        }
    }

    /// Positional representation for tuple-based interfaces.
    pub fn to_tuple(self) -> (f64, usize, usize, usize, usize) {
        (
            self.score,
            self.src_start,
            self.src_end,
            self.dest_start,
            self.dest_end,
        )
    }
}

impl From<(f64, usize, usize, usize, usize)> for ScoreAlignment {
    fn from(
        (score, src_start, src_end, dest_start, dest_end): (f64, usize, usize, usize, usize),
    ) -> Self {
        ScoreAlignment::new(score, src_start, src_end, dest_start, dest_end)
    }
}

impl From<ScoreAlignment> for (f64, usize, usize, usize, usize) {
    fn from(alignment: ScoreAlignment) -> Self {
        alignment.to_tuple()
    }
}

impl fmt::Display for ScoreAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "score={} ({}..{}, {}..{})",
            self.score, self.src_start, self.src_end, self.dest_start, self.dest_end
        )
    }
}
