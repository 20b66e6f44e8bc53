/// Represents a single heading found in a Markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading text with surrounding whitespace trimmed
    pub title: String,
    /// Nesting depth: 0 for `===` underlines, 1 for `---` underlines, 2 for `###` prefixes
    pub depth: usize,
    /// Index of the line that triggered the heading (the marker line, not the title line)
    pub line_index: usize,
}

/// Extract headings from a sequence of Markdown lines
///
/// Underline-style markers (`===`, `---`) title the line immediately above
/// them, so each line is classified together with its predecessor. Emission
/// order equals document order.
pub fn parse_headings(lines: &[String]) -> Vec<Heading> {
    std::iter::once("")
        .chain(lines.iter().map(String::as_str))
        .zip(lines.iter().map(String::as_str))
        .enumerate()
        .filter_map(|(line_index, (previous, current))| classify(previous, current, line_index))
        .collect()
}

/// Classify one line of the sliding window, using the previous line for
/// underline-style titles. The three checks are mutually exclusive per line.
fn classify(previous: &str, current: &str, line_index: usize) -> Option<Heading> {
    if current.contains("===") {
        Some(Heading {
            title: previous.trim().to_string(),
            depth: 0,
            line_index,
        })
    } else if current.contains("---") {
        Some(Heading {
            title: previous.trim().to_string(),
            depth: 1,
            line_index,
        })
    } else if current.contains("###") {
        // Title is the remainder after the marker and the following character
        Some(Heading {
            title: current.chars().skip(4).collect::<String>().trim().to_string(),
            depth: 2,
            line_index,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_depth_nesting() {
        let lines = to_lines(&["Title A", "===", "Title B", "---", "### Title C"]);
        let headings = parse_headings(&lines);

        assert_eq!(headings.len(), 3);
        assert_eq!(headings[0], Heading { title: "Title A".to_string(), depth: 0, line_index: 1 });
        assert_eq!(headings[1], Heading { title: "Title B".to_string(), depth: 1, line_index: 3 });
        assert_eq!(headings[2], Heading { title: "Title C".to_string(), depth: 2, line_index: 4 });
    }

    #[test]
    fn test_underline_titles_are_trimmed() {
        let lines = to_lines(&["  Spaced Title  ", "======"]);
        let headings = parse_headings(&lines);

        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].title, "Spaced Title");
    }

    #[test]
    fn test_checks_are_mutually_exclusive_in_order() {
        // A line containing both markers classifies by the first check
        let lines = to_lines(&["Title", "===---"]);
        let headings = parse_headings(&lines);

        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].depth, 0);
    }

    #[test]
    fn test_bare_third_level_marker_yields_empty_title() {
        let lines = to_lines(&["###"]);
        let headings = parse_headings(&lines);

        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].title, "");
        assert_eq!(headings[0].depth, 2);
    }

    #[test]
    fn test_no_headings() {
        let lines = to_lines(&["just", "plain", "text"]);
        assert!(parse_headings(&lines).is_empty());
    }
}
