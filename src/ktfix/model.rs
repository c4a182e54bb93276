/// The two delimiter kinds the repairs care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Brace,
    Paren,
}

impl Delimiter {
    pub fn open(&self) -> char {
        match self {
            Delimiter::Brace => '{',
            Delimiter::Paren => '(',
        }
    }

    pub fn close(&self) -> char {
        match self {
            Delimiter::Brace => '}',
            Delimiter::Paren => ')',
        }
    }
}

/// Open/close occurrence counts for one delimiter kind.
///
/// Counts are raw character counts. Delimiters inside string literals or
/// comments are indistinguishable from structural ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterCount {
    pub opens: usize,
    pub closes: usize,
}

impl DelimiterCount {
    pub fn of_line(line: &str, delimiter: Delimiter) -> Self {
        let opens = line.matches(delimiter.open()).count();
        let closes = line.matches(delimiter.close()).count();
        Self { opens, closes }
    }

    pub fn of_buffer(buffer: &SourceBuffer, delimiter: Delimiter) -> Self {
        buffer.lines().iter().fold(
            Self {
                opens: 0,
                closes: 0,
            },
            |acc, line| {
                let count = Self::of_line(line, delimiter);
                Self {
                    opens: acc.opens + count.opens,
                    closes: acc.closes + count.closes,
                }
            },
        )
    }

    /// Unmatched opens, clamped at zero. A surplus of closers reports 0.
    pub fn deficit(&self) -> usize {
        self.opens.saturating_sub(self.closes)
    }

    /// Signed opens minus closes, for running depth scans.
    pub fn balance(&self) -> isize {
        self.opens as isize - self.closes as isize
    }
}

/// A located occurrence of a repair trigger: the line index where it starts
/// and the line's leading-whitespace width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch {
    pub line: usize,
    pub indent: usize,
}

impl PatternMatch {
    pub fn new(line: usize, text: &str) -> Self {
        Self {
            line,
            indent: text.len() - text.trim_start().len(),
        }
    }
}

/// A minimal description of one change to a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairEdit {
    /// Strip trailing blank lines, append `count` lines each holding a single
    /// closing brace, then restore a single trailing blank line.
    AppendClosers { count: usize },
    /// Replace the line at `line` wholesale with `text`.
    RewriteLine { line: usize, text: String },
}

/// An ordered sequence of text lines for one file's contents.
///
/// Splitting on `\n` and joining with `\n` round-trips any input text
/// byte-for-byte, so a buffer that receives no edits writes back exactly
/// what was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    lines: Vec<String>,
}

impl SourceBuffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(String::from).collect(),
        }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Produce a new buffer with the given edits applied in order.
    pub fn apply(&self, edits: &[RepairEdit]) -> SourceBuffer {
        let mut lines = self.lines.clone();
        for edit in edits {
            match edit {
                RepairEdit::AppendClosers { count } => {
                    while lines.last().map(|l| l.trim().is_empty()).unwrap_or(false) {
                        lines.pop();
                    }
                    for _ in 0..*count {
                        lines.push("}".to_string());
                    }
                    lines.push(String::new());
                }
                RepairEdit::RewriteLine { line, text } => {
                    if let Some(slot) = lines.get_mut(*line) {
                        *slot = text.clone();
                    }
                }
            }
        }
        SourceBuffer { lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trips() {
        for text in ["", "one line", "fun f() {\n}\n", "a\n\n\nb", "trailing\n"] {
            assert_eq!(SourceBuffer::from_text(text).to_text(), text);
        }
    }

    #[test]
    fn counts_braces_per_line() {
        let count = DelimiterCount::of_line("fun f() { g { } }", Delimiter::Brace);
        assert_eq!(count.opens, 2);
        assert_eq!(count.closes, 2);
        assert_eq!(count.deficit(), 0);
    }

    #[test]
    fn counts_across_buffer() {
        let buffer = SourceBuffer::from_text("class A {\n  fun f() {\n}\n");
        let count = DelimiterCount::of_buffer(&buffer, Delimiter::Brace);
        assert_eq!(count.opens, 2);
        assert_eq!(count.closes, 1);
        assert_eq!(count.deficit(), 1);
    }

    #[test]
    fn surplus_closers_report_zero_deficit() {
        let count = DelimiterCount::of_line("} }", Delimiter::Brace);
        assert_eq!(count.deficit(), 0);
        assert_eq!(count.balance(), -2);
    }

    #[test]
    fn paren_balance_is_signed() {
        assert_eq!(
            DelimiterCount::of_line("foo(bar(", Delimiter::Paren).balance(),
            2
        );
        assert_eq!(DelimiterCount::of_line(")", Delimiter::Paren).balance(), -1);
    }

    #[test]
    fn pattern_match_records_indent_width() {
        let m = PatternMatch::new(4, "    _uiState.update { it.copy(");
        assert_eq!(m.line, 4);
        assert_eq!(m.indent, 4);
    }

    #[test]
    fn append_closers_strips_blanks_and_restores_one() {
        let buffer = SourceBuffer::from_text("fun f() {\n  \n\n");
        let repaired = buffer.apply(&[RepairEdit::AppendClosers { count: 1 }]);
        assert_eq!(repaired.to_text(), "fun f() {\n}\n");
    }

    #[test]
    fn append_closers_without_trailing_blank() {
        let buffer = SourceBuffer::from_text("fun f() {");
        let repaired = buffer.apply(&[RepairEdit::AppendClosers { count: 1 }]);
        assert_eq!(repaired.to_text(), "fun f() {\n}\n");
    }

    #[test]
    fn rewrite_line_replaces_only_that_line() {
        let buffer = SourceBuffer::from_text("a\nb\nc");
        let repaired = buffer.apply(&[RepairEdit::RewriteLine {
            line: 1,
            text: "B".to_string(),
        }]);
        assert_eq!(repaired.to_text(), "a\nB\nc");
    }

    #[test]
    fn rewrite_line_out_of_range_is_ignored() {
        let buffer = SourceBuffer::from_text("a");
        let repaired = buffer.apply(&[RepairEdit::RewriteLine {
            line: 9,
            text: "x".to_string(),
        }]);
        assert_eq!(repaired, buffer);
    }
}
