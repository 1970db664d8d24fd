//! Whitespace normalization applied after extraction

/// Normalize extracted text.
///
/// Strips NUL bytes left behind by PDF extraction, folds CRLF line endings,
/// collapses runs of 3 or more blank lines down to exactly 2, and trims the
/// ends of the whole document. Whitespace inside a line is left alone.
pub fn normalize(text: &str) -> String {
    let text = text.replace('\0', "");
    let mut kept: Vec<&str> = Vec::new();
    let mut pending_blanks = 0usize;

    for line in text.lines() {
        if line.trim().is_empty() {
            if !kept.is_empty() {
                pending_blanks += 1;
            }
        } else {
            for _ in 0..pending_blanks.min(2) {
                kept.push("");
            }
            pending_blanks = 0;
            kept.push(line);
        }
    }

    kept.join("\n").trim().to_string()
}
