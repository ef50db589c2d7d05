use crate::entry::Entry;

/// Builds an [`Entry`] from a file's raw text.
///
/// The file may start with a pandoc-style metadata block:
///
/// ```text
/// ---
/// date: 2024-05-01
/// author: "Jane"
/// ---
/// body text...
/// ```
///
/// Anything not matching that exact shape (no block, or an opening `---`
/// without a closing one) is treated as plain body text with default
/// metadata. Only `date` and `author` can be set from the block; `id` and
/// `content` are always derived.
pub(crate) fn parse(id: &str, raw: &str) -> Entry {
    let mut entry = Entry {
        id: id.to_string(),
        date: "".to_string(),
        author: "Unknown".to_string(),
        content: raw.trim().to_string(),
    };

    let header_pattern = regex::RegexBuilder::new(r"^---\s*\n(.*?)\n---\s*\n(.*)")
        .dot_matches_new_line(true)
        .build()
        .unwrap();
    if let Some(caps) = header_pattern.captures(raw) {
        for line in caps[1].split('\n') {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            let key = key.trim().to_lowercase();
            let value = strip_quotes(value.trim());
            match key.as_str() {
                "date" => entry.date = value.to_string(),
                "author" => entry.author = value.to_string(),
                _ => {}
            }
        }

        entry.content = caps[2].trim().to_string();
    }

    entry
}

// One quote character per side, each side on its own. `"hello` loses its
// leading quote even without a closing one; doubled quotes keep the inner
// pair.
fn strip_quotes(value: &str) -> &str {
    let mut value = value;
    for quote in ['"', '\''] {
        value = value.strip_prefix(quote).unwrap_or(value);
        value = value.strip_suffix(quote).unwrap_or(value);
    }
    value
}
