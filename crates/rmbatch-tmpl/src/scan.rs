//! Scanner for placeholder tokens in template text.
//!
//! Splits a template body into literal runs, `{name}` placeholders due for
//! resolution in the current pass, and `{{name}}` tokens whose resolution
//! is deferred to a later pass. Scheduler directive lines are not treated
//! specially; they are scanned like any other text.

use crate::error::{TmplError, TmplResult};

/// One segment of template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text copied through unchanged.
    Literal(&'a str),
    /// A `{name}` token resolved by the current pass.
    Placeholder(&'a str),
    /// A `{{name}}` token emitted as literal `{name}`, left for a later pass.
    Deferred(&'a str),
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// 1-based line and column of a byte offset.
fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let upto = &text[..offset];
    let line = upto.bytes().filter(|&b| b == b'\n').count() + 1;
    let col = match upto.rfind('\n') {
        Some(nl) => offset - nl,
        None => offset + 1,
    };
    (line, col)
}

fn malformed(text: &str, offset: usize, message: impl Into<String>) -> TmplError {
    let (line, col) = line_col(text, offset);
    TmplError::MalformedTemplate {
        line,
        col,
        message: message.into(),
    }
}

/// Scan template text into segments.
///
/// Every brace in the input must belong to a well-formed token: a stray
/// `{`, a stray `}`, empty braces, or a non-identifier character inside
/// braces is a [`TmplError::MalformedTemplate`]. Identifiers are ASCII
/// alphanumerics and underscores.
pub fn scan(text: &str) -> TmplResult<Vec<Segment<'_>>> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut lit_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if lit_start < i {
                    segments.push(Segment::Literal(&text[lit_start..i]));
                }

                let doubled = bytes.get(i + 1) == Some(&b'{');
                let name_start = if doubled { i + 2 } else { i + 1 };
                let mut j = name_start;
                while j < bytes.len() && is_ident_byte(bytes[j]) {
                    j += 1;
                }
                if j == name_start {
                    return Err(malformed(text, i, "empty placeholder"));
                }
                let name = &text[name_start..j];

                if doubled {
                    if bytes.get(j) == Some(&b'}') && bytes.get(j + 1) == Some(&b'}') {
                        segments.push(Segment::Deferred(name));
                        i = j + 2;
                    } else {
                        return Err(malformed(
                            text,
                            i,
                            format!("'{{{{{name}' is not closed by '}}}}'"),
                        ));
                    }
                } else if bytes.get(j) == Some(&b'}') {
                    segments.push(Segment::Placeholder(name));
                    i = j + 1;
                } else {
                    return Err(malformed(
                        text,
                        i,
                        format!("'{{{name}' is not closed by '}}'"),
                    ));
                }
                lit_start = i;
            }
            b'}' => {
                return Err(malformed(text, i, "unmatched '}'"));
            }
            _ => i += 1,
        }
    }

    if lit_start < bytes.len() {
        segments.push(Segment::Literal(&text[lit_start..]));
    }

    Ok(segments)
}
