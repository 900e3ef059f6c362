/// A range of text defined by start and end offsets.
///
/// Offsets are counted in UTF-16 code units and ranges are half-open
/// intervals [start, end): the start offset is included, the end offset
/// is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// The start offset (inclusive).
    pub start: usize,
    /// The end offset (exclusive).
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of code units covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The same range with start <= end guaranteed.
    pub fn normalized(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }
}

/// Errors reported by the resolver and the key dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The supplied offset does not lie within the buffer.
    #[error("offset {offset} is out of range for a buffer of {len} code units")]
    OutOfRange { offset: usize, len: usize },
}
