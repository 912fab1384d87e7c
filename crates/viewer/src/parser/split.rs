//! Cutting raw content into classifier units.

/// Two-character escape some endpoints leave in place of real newlines.
pub const ESCAPED_NEWLINE: &str = "\\n";

/// Split on real newlines (`\n` or `\r\n`), dropping blank lines.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().filter(|line| !line.trim().is_empty())
}

/// Split on real newlines and on literal `\n` escapes, dropping blank units.
pub fn split_escaped_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .flat_map(|line| line.split(ESCAPED_NEWLINE))
        .filter(|unit| !unit.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_drops_blanks() {
        let units: Vec<_> = split_lines("a\n\n   \nb\r\nc\n").collect();
        assert_eq!(units, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_keeps_indentation() {
        let units: Vec<_> = split_lines("head\n    at frame").collect();
        assert_eq!(units, vec!["head", "    at frame"]);
    }

    #[test]
    fn test_split_escaped_lines() {
        let units: Vec<_> = split_escaped_lines("one\\ntwo\nthree\\n\\n").collect();
        assert_eq!(units, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_escaped_lines("  \n\t").count(), 0);
    }
}
