use crate::book::NavEntry;

/// Pre-order linearization of the navigation forest: each entry before its
/// children, siblings in document order. Uses an explicit work stack so a
/// pathologically nested toc cannot overflow the call stack.
pub fn flatten(entries: &[NavEntry]) -> Vec<&NavEntry> {
    let mut flat = Vec::new();
    let mut stack: Vec<&NavEntry> = entries.iter().rev().collect();

    while let Some(entry) = stack.pop() {
        flat.push(entry);
        stack.extend(entry.children.iter().rev());
    }

    flat
}

/// True for titles worth offering for extraction: anything containing a
/// decimal digit, plus prologue/epilogue entries (matched
/// case-insensitively). Numeric-looking characters that are not decimal
/// digits (roman numerals, fractions) do not count.
pub fn is_selectable(title: &str) -> bool {
    if title.is_empty() {
        return false;
    }
    if title.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }
    let lower = title.to_lowercase();
    lower.contains("epilogue") || lower.contains("prologue")
}

/// Stable filter over a flattened navigation list; the result's positions
/// are the user-facing 1-based chapter numbers.
pub fn filter_chapters<'a>(entries: &[&'a NavEntry]) -> Vec<&'a NavEntry> {
    entries
        .iter()
        .copied()
        .filter(|entry| is_selectable(&entry.title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, children: Vec<NavEntry>) -> NavEntry {
        NavEntry {
            title: title.to_string(),
            link: None,
            children,
        }
    }

    fn sample_forest() -> Vec<NavEntry> {
        vec![
            entry(
                "Part 1",
                vec![
                    entry("Chapter 1", vec![entry("Section 1.1", vec![])]),
                    entry("Chapter 2", vec![]),
                ],
            ),
            entry("Appendix", vec![]),
        ]
    }

    #[test]
    fn flatten_is_preorder_and_complete() {
        let forest = sample_forest();
        let titles: Vec<&str> = flatten(&forest).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Part 1", "Chapter 1", "Section 1.1", "Chapter 2", "Appendix"]
        );
    }

    #[test]
    fn flatten_handles_deep_nesting() {
        let mut root = entry("0", vec![]);
        for depth in 1..10_000 {
            root = entry(&depth.to_string(), vec![root]);
        }
        let forest = vec![root];
        assert_eq!(flatten(&forest).len(), 10_000);
    }

    #[test]
    fn predicate_matches_digits_and_special_titles() {
        assert!(is_selectable("Chapter 3"));
        assert!(is_selectable("Prologue"));
        assert!(is_selectable("EPILOGUE: The End"));
        assert!(!is_selectable("Introduction"));
        assert!(!is_selectable(""));
    }

    #[test]
    fn predicate_requires_a_decimal_digit() {
        assert!(!is_selectable("Part Ⅻ"));
        assert!(!is_selectable("Chapter ½"));
        assert!(is_selectable("Chapter 12"));
    }

    #[test]
    fn filter_is_stable_and_idempotent() {
        let forest = sample_forest();
        let flat = flatten(&forest);
        let filtered = filter_chapters(&flat);

        let titles: Vec<&str> = filtered.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Part 1", "Chapter 1", "Section 1.1", "Chapter 2"]);

        let refiltered = filter_chapters(&filtered);
        let retitles: Vec<&str> = refiltered.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(retitles, titles);
    }
}
