//! Line-level snapshot comparison.
//!
//! Pure set difference: a line counts as new when it is present in the
//! current snapshot and absent from the previous one. Order-independent;
//! duplicates within a snapshot were already collapsed at load time.

use std::collections::HashSet;

/// Lines present in `current` but not in `previous`.
pub fn new_lines(current: &HashSet<String>, previous: &HashSet<String>) -> HashSet<String> {
    current.difference(previous).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(lines: &[&str]) -> HashSet<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identical_snapshots_diff_to_empty() {
        let a = set(&["item.1=Sword", "ui.title=Menu"]);
        assert!(new_lines(&a, &a).is_empty());
    }

    #[test]
    fn empty_previous_yields_current_unchanged() {
        let current = set(&["item.1=Sword", "ui.title=Menu"]);
        assert_eq!(new_lines(&current, &HashSet::new()), current);
    }

    #[test]
    fn only_added_lines_are_reported() {
        let previous = set(&["item.1=Sword", "ui.title=Menu"]);
        let current = set(&["item.1=Sword", "ui.title=Menu", "ui.exit=Exit"]);
        assert_eq!(new_lines(&current, &previous), set(&["ui.exit=Exit"]));
    }

    #[test]
    fn removed_lines_do_not_count_as_new() {
        let previous = set(&["item.1=Sword", "ui.title=Menu"]);
        let current = set(&["ui.title=Menu"]);
        assert!(new_lines(&current, &previous).is_empty());
    }

    #[test]
    fn disjoint_sets_report_all_of_current() {
        let previous = set(&["a.x=1"]);
        let current = set(&["b.y=2", "c.z=3"]);
        assert_eq!(new_lines(&current, &previous), current);
    }

    #[test]
    fn empty_both_sides_diff_to_empty() {
        assert!(new_lines(&HashSet::new(), &HashSet::new()).is_empty());
    }
}
