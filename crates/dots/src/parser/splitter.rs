/// Split raw edge-list text into lines, and each line into space-separated fields.
///
/// Every `\n` ends a line, so a trailing newline leaves an empty last line and a `\r`
/// stays part of the final field. Empty input yields no lines at all. Fields are split
/// on every single space, so a run of spaces produces empty fields; nothing is trimmed.
/// Malformed lines are passed through untouched for the record parser to flag.
pub fn split(text: &str) -> Vec<Vec<&str>> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(split_fields).collect()
}

/// Split one line on single spaces.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(' ').collect()
}
