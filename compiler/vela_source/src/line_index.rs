//! Byte offset to line/column mapping.

/// Pre-computed table of line-start offsets for one source file.
///
/// Built once per file, O(log L) lookups afterwards. Columns are counted
/// in characters, not bytes, so multi-byte source still reports sensible
/// positions.
#[derive(Clone, Debug, Default)]
pub struct LineIndex {
    /// Byte offset of each line start. `starts[0]` is always 0;
    /// `starts[n]` is the byte after the n-th newline.
    starts: Vec<u32>,
}

impl LineIndex {
    /// Scan `source` once and record every line start.
    pub fn build(source: &str) -> Self {
        let mut starts = vec![0u32];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                starts.push((i + 1) as u32);
            }
        }
        LineIndex { starts }
    }

    /// 1-based line number containing `offset`.
    #[inline]
    pub fn line(&self, offset: u32) -> u32 {
        let idx = match self.starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        (idx as u32) + 1
    }

    /// 1-based (line, column) for `offset`, with the column counted in
    /// characters from the line start.
    pub fn line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line(offset);
        let start = self.starts.get((line - 1) as usize).copied().unwrap_or(0) as usize;
        let offset = (offset as usize).min(source.len());
        let col = u32::try_from(source[start..offset].chars().count()).unwrap_or(u32::MAX - 1) + 1;
        (line, col)
    }

    /// Byte offset where the 1-based `line` starts, if it exists.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.starts.get((line - 1) as usize).copied()
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        let index = LineIndex::build("hello world");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line(0), 1);
        assert_eq!(index.line(10), 1);
        assert_eq!(index.line_start(2), None);
    }

    #[test]
    fn line_boundaries() {
        let source = "line1\nline2\nline3";
        let index = LineIndex::build(source);
        assert_eq!(index.line(0), 1); // 'l' of line1
        assert_eq!(index.line(5), 1); // the '\n' itself
        assert_eq!(index.line(6), 2); // 'l' of line2
        assert_eq!(index.line(12), 3); // 'l' of line3
        assert_eq!(index.line_start(2), Some(6));
        assert_eq!(index.line_start(4), None);
    }

    #[test]
    fn line_col_counts_characters() {
        let source = "abc\ndefgh\nij";
        let index = LineIndex::build(source);
        assert_eq!(index.line_col(source, 0), (1, 1)); // 'a'
        assert_eq!(index.line_col(source, 2), (1, 3)); // 'c'
        assert_eq!(index.line_col(source, 4), (2, 1)); // 'd'
        assert_eq!(index.line_col(source, 7), (2, 4)); // 'g'
        assert_eq!(index.line_col(source, 10), (3, 1)); // 'i'
    }

    #[test]
    fn line_col_unicode() {
        // Greek letters are 2 bytes each
        let source = "αβγ\nδε";
        let index = LineIndex::build(source);
        assert_eq!(index.line_col(source, 0), (1, 1)); // 'α'
        assert_eq!(index.line_col(source, 2), (1, 2)); // 'β'
        assert_eq!(index.line_col(source, 7), (2, 1)); // 'δ' (after \n at byte 6)
    }

    #[test]
    fn trailing_newline_opens_a_line() {
        let index = LineIndex::build("line1\nline2\n");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line(12), 3);
    }

    #[test]
    fn empty_source() {
        let index = LineIndex::build("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col("", 0), (1, 1));
    }

    #[test]
    fn line_zero_has_no_start() {
        let index = LineIndex::build("test");
        assert_eq!(index.line_start(0), None);
    }
}
