//! Minimal CSV/TSV parser that produces table rows.

/// Delimiter for parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }
}

/// Parse CSV/TSV bytes into rows of trimmed fields.
///
/// Blank lines are skipped; rows may be ragged.
pub fn parse_delimited(data: &[u8], delim: Delimiter) -> Vec<Vec<String>> {
    let text = String::from_utf8_lossy(data);
    let sep = delim.as_char();

    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            split_csv_line(line, sep)
                .into_iter()
                .map(|field| field.trim().to_string())
                .collect()
        })
        .collect()
}

/// Split off the first row as a header.
pub fn split_header(mut rows: Vec<Vec<String>>) -> (Option<Vec<String>>, Vec<Vec<String>>) {
    if rows.is_empty() {
        return (None, rows);
    }
    let header = rows.remove(0);
    (Some(header), rows)
}

/// Split a CSV line respecting quoted fields.
fn split_csv_line(line: &str, sep: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == sep {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}
