use rubout::traits::TextOps;
use rubout::types::Range;

/// Test buffer: a UTF-16 code-unit vector plus a list of atomic spans,
/// with logical-line deletion enabled.
pub struct MockBuffer {
    units: Vec<u16>,
    spans: Vec<Range>,
}

impl MockBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            units: text.encode_utf16().collect(),
            spans: Vec::new(),
        }
    }

    /// Marks `[start, end)` as an atomic inline object.
    pub fn with_span(mut self, start: usize, end: usize) -> Self {
        self.spans.push(Range::new(start, end));
        self
    }

    pub fn text(&self) -> String {
        char::decode_utf16(self.units.iter().copied())
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    /// Removes `range`, returning the removed units so tests can reinsert
    /// them for round-trip checks.
    pub fn delete(&mut self, range: Range) -> Vec<u16> {
        self.units.drain(range.start..range.end).collect()
    }

    pub fn insert(&mut self, at: usize, units: &[u16]) {
        self.units.splice(at..at, units.iter().copied());
    }
}

impl TextOps for MockBuffer {
    fn len_units(&self) -> usize {
        self.units.len()
    }

    fn unit(&self, index: usize) -> u16 {
        self.units[index]
    }

    fn atomic_spans(&self, range: Range) -> Vec<Range> {
        self.spans
            .iter()
            .copied()
            .filter(|s| s.start <= range.end && range.start <= s.end)
            .collect()
    }

    fn line_range(&self, offset: usize) -> Option<Range> {
        let start = self.units[..offset]
            .iter()
            .rposition(|&u| u == 0x0A)
            .map_or(0, |i| i + 1);
        let end = self.units[offset..]
            .iter()
            .position(|&u| u == 0x0A)
            .map_or(self.units.len(), |i| offset + i + 1);
        Some(Range::new(start, end))
    }
}
