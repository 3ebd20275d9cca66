//! Byte offset to `line:col` conversion.

/// Start offsets of every line in a source, for rendering token positions.
///
/// Lines and columns are 1-based. Columns count bytes, so a tab or a
/// multi-byte character advances the column by its encoded length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            memchr::memchr_iter(b'\n', source.as_bytes())
                .map(|nl| u32::try_from(nl + 1).unwrap_or(u32::MAX)),
        );
        Self { starts }
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// 1-based `(line, column)` of `offset`.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        // starts[0] == 0, so at least one start is <= offset.
        let line = self.starts.partition_point(|&start| start <= offset);
        let start = self.starts.get(line - 1).copied().unwrap_or(0);
        (u32::try_from(line).unwrap_or(u32::MAX), offset - start + 1)
    }
}
