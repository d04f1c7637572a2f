const QUOTE_CHARS: [char; 3] = ['"', '\'', '`'];

/// Cleans a raw text fragment.
///
/// Strips a wrapping layer of quote characters (`"`, `'` or backtick), collapses
/// interior whitespace runs into a single space and trims. A layer only counts
/// when the fragment both starts and ends with a quote, so `Rockin'` keeps its
/// apostrophe. Stripping repeats until nothing changes, which makes the
/// function idempotent.
pub fn normalize_field(raw: &str) -> String {
    let mut current = raw.trim();

    loop {
        let stripped = strip_quote_layer(current).trim();
        if stripped.len() == current.len() {
            break;
        }
        current = stripped;
    }

    current.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_quote_layer(s: &str) -> &str {
    let mut chars = s.chars();
    let (Some(first), last) = (chars.next(), chars.next_back()) else {
        return s;
    };

    match last {
        Some(last) if QUOTE_CHARS.contains(&first) && QUOTE_CHARS.contains(&last) => {
            &s[first.len_utf8()..s.len() - last.len_utf8()]
        }
        // a lone quote character
        None if QUOTE_CHARS.contains(&first) => "",
        _ => s,
    }
}
