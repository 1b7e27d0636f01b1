//! `(listfile)` parsing
//!
//! Archives conventionally carry their own manifest in a member named
//! `(listfile)`, one filename per line. Replay archives written by the
//! game always include one.

/// Parse listfile bytes into filenames.
///
/// Lines are split on `\n` with optional `\r`. Blank lines and lines
/// starting with `;` or `#` are skipped; a `;` inside a line starts
/// trailing metadata, which is dropped.
pub fn parse_listfile(data: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(data);
    let mut names = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        let name = match line.find(';') {
            Some(pos) => line[..pos].trim_end(),
            None => line,
        };
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }

    names
}
