/// Human-readable location of a byte offset in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePosition {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub col: usize,
    /// The full line containing the offset, without its line terminator.
    pub source_line: String,
}

impl SourcePosition {
    /// Resolve `offset` in `source`. Offsets past the end clamp to the end.
    pub fn locate(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }

        let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[offset..]
            .find('\n')
            .map_or(source.len(), |i| offset + i);

        Self {
            line: source[..line_start].matches('\n').count() + 1,
            col: source[line_start..offset].chars().count() + 1,
            source_line: source[line_start..line_end].trim_end_matches('\r').to_string(),
        }
    }
}
