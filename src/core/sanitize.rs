// src/core/sanitize.rs

/// Collapse runs of whitespace into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop line breaks entirely; neighbours are joined, not spaced.
pub fn remove_newlines(s: &str) -> String {
    s.chars().filter(|&c| c != '\n').collect()
}

/// "12,345" → "12345". Stays text; no numeric parse.
pub fn strip_grouping(s: &str) -> String {
    s.chars().filter(|&c| c != ',').collect()
}

/// Spreadsheets read "3/10" as a date; a leading space stops that.
pub fn shield_fraction(s: &str) -> String {
    join!(" ", s)
}

/// Filesystem-safe stem for the export file. Path separators, characters
/// Windows rejects and control characters become `_`; everything else
/// (spaces included) is kept so the name still reads like the query.
pub fn sanitize_query_filename(query: &str) -> String {
    query
        .trim()
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// "work_123" → "123"; bare ids pass through.
pub fn bare_work_id(id: &str) -> &str {
    let id = id.trim();
    id.strip_prefix(crate::config::consts::WORK_ID_PREFIX).unwrap_or(id)
}
