//! YSON pretty-printer.
//!
//! A single left-to-right pass over the source with an explicit delimiter
//! stack. All whitespace outside string literals is dropped and
//! re-synthesized: newline plus indentation at structural boundaries, one
//! space after each colon. String literals and primitive constructor
//! spans are copied verbatim. This is a formatting aid, not a validator:
//! malformed input degrades to best-effort output instead of failing.

use crate::error::YsonFormatError;
use crate::types::YsonType;

/// Options controlling YSON formatting.
#[derive(Debug, Clone)]
pub struct YsonFormatterOptions {
    /// Spaces per indentation level. Default is 2.
    pub indent: usize,
}

impl Default for YsonFormatterOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Re-indents compact YSON snapshots for display.
#[derive(Debug, Clone, Default)]
pub struct YsonFormatter {
    pub options: YsonFormatterOptions,
}

impl YsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: YsonFormatterOptions) -> Self {
        Self { options }
    }

    /// Format `source`, tolerating malformed input.
    ///
    /// Always returns a string; unbalanced delimiters and unterminated
    /// literals produce imperfectly formatted but complete output.
    pub fn format(&self, source: &str) -> String {
        let mut scanner = Scanner::new(source, self.options.indent);
        scanner.run();
        scanner.out
    }

    /// Format `source`, reporting the first structural defect found.
    ///
    /// The produced text is identical to [`format`](Self::format); the
    /// only difference is that scan-time defects surface as errors.
    pub fn format_strict(&self, source: &str) -> Result<String, YsonFormatError> {
        let mut scanner = Scanner::new(source, self.options.indent);
        scanner.run();
        match scanner.error {
            Some(err) => Err(err),
            None => Ok(scanner.out),
        }
    }
}

/// Format with the default two-space indent.
pub fn format(source: &str) -> String {
    YsonFormatter::new().format(source)
}

/// Format with `indent` spaces per level.
pub fn format_with_indent(source: &str, indent: usize) -> String {
    YsonFormatter::with_options(YsonFormatterOptions { indent }).format(source)
}

/// Remove all whitespace outside string literals.
///
/// Formatting is whitespace-only, so stripping the formatter's output
/// yields the same string as stripping its input.
pub fn strip_whitespace(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                out.push('"');
                let mut escaped = false;
                for c in chars.by_ref() {
                    out.push(c);
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        break;
                    }
                }
            }
            ' ' | '\t' | '\r' | '\n' => {}
            _ => out.push(c),
        }
    }
    out
}

/// An open structural delimiter.
#[derive(Debug, PartialEq, Eq)]
enum Frame {
    Object,
    Array,
    /// Opening paren of a `Text(` / `Tree(` constructor.
    Compound,
    /// Paren with no recognized constructor; passes through unindented.
    Paren,
}

struct Scanner<'a> {
    src: &'a str,
    indent: usize,
    out: String,
    stack: Vec<Frame>,
    level: usize,
    /// Previous source character, used to keep constructor recognition
    /// from firing in the middle of a longer identifier.
    prev: Option<char>,
    error: Option<YsonFormatError>,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str, indent: usize) -> Self {
        Self {
            src,
            indent,
            out: String::with_capacity(src.len() * 2),
            stack: Vec::new(),
            level: 0,
            prev: None,
            error: None,
        }
    }

    fn run(&mut self) {
        let mut i = 0;
        while let Some(c) = self.src[i..].chars().next() {
            i = match c {
                '"' => self.copy_string(i),
                '{' | '[' => self.open_bracket(i, c),
                '}' => self.close_bracket(i, Frame::Object, '}'),
                ']' => self.close_bracket(i, Frame::Array, ']'),
                '(' => {
                    self.stack.push(Frame::Paren);
                    self.out.push('(');
                    self.advance(i, '(')
                }
                ')' => self.close_paren(i),
                ',' => self.comma(i),
                ':' => {
                    self.out.push_str(": ");
                    self.advance(i, ':')
                }
                ' ' | '\t' | '\r' | '\n' => self.advance(i, c),
                _ => match self.recognize_constructor(i) {
                    Some(t) => self.constructor(i, t),
                    None => {
                        self.out.push(c);
                        self.advance(i, c)
                    }
                },
            };
        }
        if self.error.is_none() && !self.stack.is_empty() {
            self.error = Some(YsonFormatError::UnclosedDelimiters {
                open: self.stack.len(),
            });
        }
    }

    /// Consume `c` at byte `i`.
    fn advance(&mut self, i: usize, c: char) -> usize {
        self.prev = Some(c);
        i + c.len_utf8()
    }

    /// First non-whitespace character at or after byte `i`.
    fn next_non_ws(&self, i: usize) -> Option<(usize, char)> {
        self.src[i..]
            .char_indices()
            .find(|(_, c)| !c.is_ascii_whitespace())
            .map(|(j, c)| (i + j, c))
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.level * self.indent {
            self.out.push(' ');
        }
    }

    /// Copy a string literal verbatim, including its quotes. Characters
    /// inside the literal never trigger structural transitions.
    fn copy_string(&mut self, i: usize) -> usize {
        self.out.push('"');
        let mut j = i + 1;
        let mut escaped = false;
        while let Some(c) = self.src[j..].chars().next() {
            j += c.len_utf8();
            self.out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                self.prev = Some('"');
                return j;
            }
        }
        if self.error.is_none() {
            self.error = Some(YsonFormatError::UnterminatedString { offset: i });
        }
        self.prev = Some('"');
        j
    }

    fn open_bracket(&mut self, i: usize, open: char) -> usize {
        let close = if open == '{' { '}' } else { ']' };
        self.out.push(open);
        let after = self.advance(i, open);
        // Empty containers stay inline.
        if let Some((j, c)) = self.next_non_ws(after) {
            if c == close {
                self.out.push(close);
                return self.advance(j, close);
            }
        }
        self.stack.push(if open == '{' {
            Frame::Object
        } else {
            Frame::Array
        });
        self.level += 1;
        self.newline();
        after
    }

    fn close_bracket(&mut self, i: usize, want: Frame, close: char) -> usize {
        if self.stack.last() == Some(&want) {
            self.stack.pop();
            self.level = self.level.saturating_sub(1);
            self.newline();
        } else if self.error.is_none() {
            self.error = Some(YsonFormatError::UnexpectedClose {
                delimiter: close,
                offset: i,
            });
        }
        self.out.push(close);
        self.advance(i, close)
    }

    fn close_paren(&mut self, i: usize) -> usize {
        match self.stack.last() {
            Some(Frame::Compound) => {
                self.stack.pop();
                self.level = self.level.saturating_sub(1);
                self.newline();
            }
            Some(Frame::Paren) => {
                self.stack.pop();
            }
            _ => {
                if self.error.is_none() {
                    self.error = Some(YsonFormatError::UnexpectedClose {
                        delimiter: ')',
                        offset: i,
                    });
                }
            }
        }
        self.out.push(')');
        self.advance(i, ')')
    }

    fn comma(&mut self, i: usize) -> usize {
        self.out.push(',');
        let mut j = self.advance(i, ',');
        // One space after the comma is absorbed.
        if self.src[j..].starts_with(' ') {
            j += 1;
        }
        // Runs of numeric leaves stay on one line.
        let rest = &self.src[j..];
        if !(rest.starts_with("Int(") || rest.starts_with("Long(")) {
            self.newline();
        }
        j
    }

    /// Constructor names are only recognized at an identifier boundary,
    /// so `MyInt(` is an ordinary value rather than an `Int(` leaf.
    fn recognize_constructor(&self, i: usize) -> Option<YsonType> {
        if let Some(p) = self.prev {
            if p.is_ascii_alphanumeric() || p == '_' {
                return None;
            }
        }
        YsonType::recognize(&self.src[i..])
    }

    /// Emit a recognized constructor. Compound constructors indent like
    /// containers; the rest are copied as atomic spans.
    fn constructor(&mut self, i: usize, t: YsonType) -> usize {
        let name = t.name();
        self.out.push_str(name);
        let paren = i + name.len();
        if t.is_compound() {
            self.out.push('(');
            let after = self.advance(paren, '(');
            if let Some((j, c)) = self.next_non_ws(after) {
                if c == ')' {
                    self.out.push(')');
                    return self.advance(j, ')');
                }
            }
            self.stack.push(Frame::Compound);
            self.level += 1;
            self.newline();
            after
        } else {
            self.copy_atomic(paren)
        }
    }

    /// Copy a primitive constructor span verbatim up to its matching
    /// paren. Structural characters inside the span are inert; raw line
    /// breaks are dropped so the leaf stays on one line.
    fn copy_atomic(&mut self, i: usize) -> usize {
        let mut depth = 0usize;
        let mut j = i;
        let mut in_string = false;
        let mut escaped = false;
        while let Some(c) = self.src[j..].chars().next() {
            j += c.len_utf8();
            if in_string {
                self.out.push(c);
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    in_string = false;
                }
                continue;
            }
            match c {
                '"' => {
                    in_string = true;
                    self.out.push(c);
                }
                '\r' | '\n' => {}
                '(' => {
                    depth += 1;
                    self.out.push(c);
                }
                ')' => {
                    depth -= 1;
                    self.out.push(c);
                    if depth == 0 {
                        self.prev = Some(')');
                        return j;
                    }
                }
                _ => self.out.push(c),
            }
        }
        if self.error.is_none() {
            self.error = if in_string {
                Some(YsonFormatError::UnterminatedString { offset: i })
            } else {
                Some(YsonFormatError::UnclosedDelimiters { open: depth })
            };
        }
        self.prev = Some(')');
        j
    }
}
