//! Single-open-index accordion state.

/// Selection state for an accordion: zero or one entry open at a time.
///
/// Mutual exclusion is structural (`Option<usize>`, not a boolean per
/// entry), so no toggle sequence can leave two entries open.
///
/// | current | toggled | next |
/// |---------|---------|------|
/// | `None`    | `i`       | `Some(i)` |
/// | `Some(i)` | `i`       | `None`    |
/// | `Some(i)` | `j != i`  | `Some(j)` |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    /// State with the given entry open (the FAQ consumer starts at `Some(0)`).
    pub fn new(open: Option<usize>) -> Self {
        Self { open }
    }

    /// Currently open index, if any.
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Whether the entry at `index` is open.
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Apply a user toggle on `index`.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_closed_entry() {
        let mut acc = AccordionState::default();
        acc.toggle(2);
        assert_eq!(acc.open_index(), Some(2));
    }

    #[test]
    fn toggling_the_open_entry_closes_it() {
        let mut acc = AccordionState::new(Some(1));
        acc.toggle(1);
        assert_eq!(acc.open_index(), None);
    }

    #[test]
    fn toggling_another_entry_switches() {
        let mut acc = AccordionState::new(Some(0));
        acc.toggle(3);
        assert_eq!(acc.open_index(), Some(3));
        assert!(!acc.is_open(0));
    }

    #[test]
    fn at_most_one_entry_open_after_any_sequence() {
        let mut acc = AccordionState::new(Some(0));
        for &idx in &[0, 4, 4, 1, 2, 2, 2, 0] {
            acc.toggle(idx);
            let open_count = (0..8).filter(|&i| acc.is_open(i)).count();
            assert!(open_count <= 1);
        }
    }
}
