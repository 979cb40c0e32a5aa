//! TEXT value escaping (RFC 5545 section 3.3.11).

/// Escape a TEXT value.
///
/// Backslashes go first so the escapes added for `;`, `,` and newlines are not
/// escaped again. `\r\n` and `\n` both become the two characters `\n`.
pub fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape_text("a;b,c"), "a\\;b\\,c");
        assert_eq!(escape_text("Zeile 1\nZeile 2"), "Zeile 1\\nZeile 2");
        assert_eq!(escape_text("Zeile 1\r\nZeile 2"), "Zeile 1\\nZeile 2");
        assert_eq!(escape_text("C:\\pfad"), "C:\\\\pfad");
        assert_eq!(escape_text("Schönes Wochenende"), "Schönes Wochenende");
    }

    #[test]
    fn test_escape_does_not_double_escape() {
        // A backslash followed by a semicolon must become \\ then \;
        assert_eq!(escape_text("\\;"), "\\\\\\;");
        assert_eq!(escape_text("\\n"), "\\\\n");
    }
}
