//! Splitting of a leading `---` delimited `key: value` block from a document.

use log::debug;

use crate::metadata::Metadata;

const DELIMITER: &str = "---";
const SEPARATOR: char = ':';

/// Whitespace plus the byte order mark, which editors may leave in front of
/// the opening delimiter.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn trim(s: &str) -> &str {
    s.trim_matches(is_blank)
}

/// Splits `source` into its frontmatter and the remaining body.
///
/// When the first line is not a delimiter, or the block is never closed,
/// the metadata is empty and the body is `source` untouched. Header lines
/// without a separator are skipped. Never fails.
pub(crate) fn split(source: &str) -> (Metadata, &str) {
    let lines: Vec<&str> = source.split('\n').collect();
    if trim(lines[0]) != DELIMITER {
        return (Metadata::new(), source);
    }

    let Some(end) = lines
        .iter()
        .skip(1)
        .position(|line| trim(line) == DELIMITER)
        .map(|i| i + 1)
    else {
        debug!("frontmatter block is not terminated. treating whole input as body");
        return (Metadata::new(), source);
    };

    let mut metadata = Metadata::new();
    for line in &lines[1..end] {
        let Some((key, value)) = line.split_once(SEPARATOR) else {
            debug!("skipping frontmatter line without separator: {line:?}");
            continue;
        };
        let key = trim(key);
        if !key.is_empty() {
            metadata.insert(key, trim(value));
        }
    }

    // everything after the closing delimiter line, including its newline
    let offset: usize = lines[..=end].iter().map(|line| line.len() + 1).sum();
    let body = source.get(offset..).unwrap_or("").trim_start_matches(is_blank);

    (metadata, body)
}
