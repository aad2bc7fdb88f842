//! Line sanitization for the circuit text format.
//!
//! [`sanitize`] applies the steps below in order. Each step is exposed on its
//! own so the stripping rules can be checked in isolation.
//!
//! 1. [`trim_line`]: drop the line terminator and surrounding whitespace
//! 2. [`strip_comment`]: drop everything from the first `#`
//! 3. [`retain_allowed`]: drop characters outside `()`, whitespace,
//!    ASCII letters and digits, `.`, `,`, `_`, `-`
//! 4. [`tabs_to_spaces`]
//! 5. [`collapse_whitespace`]: runs of two or more whitespace characters
//!    become one space
//! 6. [`trim_trailing`]
//! 7. [`attach_open_paren`]: drop whitespace right before `(`
//! 8. [`strip_paren_interior`]: drop whitespace between `(` and the next `)`

/// Run the full sanitization pipeline over one raw line.
pub fn sanitize(line: &str) -> String {
    let line = trim_line(line);
    let line = strip_comment(line);
    let line = retain_allowed(line);
    let line = tabs_to_spaces(&line);
    let line = collapse_whitespace(&line);
    let line = trim_trailing(&line);
    let line = attach_open_paren(line);
    strip_paren_interior(&line)
}

/// Step 1.
pub fn trim_line(line: &str) -> &str {
    line.trim()
}

/// Step 2.
pub fn strip_comment(line: &str) -> &str {
    line.find('#').map_or(line, |pos| &line[..pos])
}

/// Step 3.
pub fn retain_allowed(line: &str) -> String {
    line.chars().filter(|&c| is_allowed(c)).collect()
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || matches!(c, '(' | ')' | '.' | ',' | '_' | '-')
}

/// Step 4.
pub fn tabs_to_spaces(line: &str) -> String {
    line.replace('\t', " ")
}

/// Step 5.
///
/// A lone whitespace character is left untouched.
pub fn collapse_whitespace(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Step 6.
pub fn trim_trailing(line: &str) -> &str {
    line.trim_end()
}

/// Step 7.
pub fn attach_open_paren(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        if c == '(' {
            let kept = out.trim_end().len();
            out.truncate(kept);
        }
        out.push(c);
    }
    out
}

/// Step 8.
///
/// A whitespace character is dropped when the next parenthesis after it is
/// a `)`.
pub fn strip_paren_interior(line: &str) -> String {
    let mut closes_ahead = false;
    let mut kept: Vec<char> = Vec::with_capacity(line.len());
    for c in line.chars().rev() {
        match c {
            ')' => closes_ahead = true,
            '(' => closes_ahead = false,
            c if c.is_whitespace() && closes_ahead => continue,
            _ => {}
        }
        kept.push(c);
    }
    kept.into_iter().rev().collect()
}
