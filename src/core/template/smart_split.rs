//! Whitespace splitting that keeps quoted phrases together.
//!
//! `"a b"` and `'a b'` are never split, a backslash escapes the next
//! character inside quotes, and quote characters stay in the output. Text
//! glued to a quoted phrase (`key="a b"`) belongs to the same fragment.
//!
//! The splitter never fails: a quote that does not close simply falls back
//! to plain whitespace splitting for that fragment.

/// Split `text` into fragments. See the module docs for the rules.
///
/// ```
/// use tplx::core::template::smart_split;
///
/// let bits: Vec<&str> = smart_split(r#"This is "a person\'s" test."#).collect();
/// assert_eq!(bits, vec!["This", "is", r#""a person\'s""#, "test."]);
/// ```
pub fn smart_split(text: &str) -> SmartSplit<'_> {
    SmartSplit { text, pos: 0 }
}

/// Iterator returned by [`smart_split`]. Cloning it restarts from the same point.
#[derive(Debug, Clone)]
pub struct SmartSplit<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for SmartSplit<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let skipped = rest.len() - rest.trim_start().len();
        let start = self.pos + skipped;
        if start >= self.text.len() {
            self.pos = self.text.len();
            return None;
        }

        let end = quoted_run_end(self.text, start).unwrap_or_else(|| bare_run_end(self.text, start));
        self.pos = end;
        Some(&self.text[start..end])
    }
}

/// Longest run of bare text interleaved with at least one complete quoted
/// phrase. Stops in front of a quote that never closes.
fn quoted_run_end(text: &str, start: usize) -> Option<usize> {
    let mut end = skip_unquoted(text, start);
    let mut saw_quote = false;

    while let Some(close) = closing_quote_end(text, end) {
        saw_quote = true;
        end = skip_unquoted(text, close);
    }

    saw_quote.then_some(end)
}

fn skip_unquoted(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|(_, c)| c.is_whitespace() || is_quote(*c))
        .map_or(text.len(), |(i, _)| from + i)
}

fn bare_run_end(text: &str, from: usize) -> usize {
    text[from..]
        .char_indices()
        .find(|(_, c)| c.is_whitespace())
        .map_or(text.len(), |(i, _)| from + i)
}

/// If a quote opens at `at`, returns the byte index just past its closing
/// quote. A backslash escapes any character except a newline.
pub(crate) fn closing_quote_end(text: &str, at: usize) -> Option<usize> {
    let mut chars = text[at..].char_indices();
    let (_, quote) = chars.next().filter(|(_, c)| is_quote(*c))?;

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, '\n')) | None => return None,
                Some(_) => {}
            },
            c if c == quote => return Some(at + i + c.len_utf8()),
            _ => {}
        }
    }
    None
}

pub(crate) fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}
