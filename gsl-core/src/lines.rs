//! Conversion between file content and line sequences.
//!
//! Lines keep any `\r` they carry so that content read from disk and written
//! back is byte-identical.

/// Split file content into lines.
///
/// A single trailing `\n` terminates the last line rather than starting an
/// empty one, so `split_lines("a\nb\n")` and `split_lines("a\nb")` both yield
/// two lines.
pub fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix('\n').unwrap_or(content);
    body.split('\n').map(str::to_string).collect()
}

/// Join lines into file content, terminating every line with `\n`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}
