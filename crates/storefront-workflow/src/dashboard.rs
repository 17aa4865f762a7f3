//! Admin dashboard menu state
//!
//! The sidebar holds a fixed, ordered set of entries with exactly one
//! selected at a time; selecting an entry retitles the header and signals
//! a `?page=` navigation.

use crate::signal::UiSignal;

/// Default sidebar entries, in display order
pub const DEFAULT_MENU_TITLES: [&str; 4] = ["Dashboard", "Users", "Products", "Chart"];

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Display title (also the `?page=` value)
    pub title: String,
    /// Whether this is the selected entry
    pub selected: bool,
}

/// Sidebar selection state plus the header title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    entries: Vec<MenuEntry>,
    header: String,
}

impl MenuState {
    /// Default menu with the first entry selected
    #[must_use]
    pub fn new() -> Self {
        Self::from_query(None)
    }

    /// Menu whose header comes from the `page` query parameter
    ///
    /// Falls back to the first entry's title when the parameter is absent.
    #[must_use]
    pub fn from_query(page: Option<&str>) -> Self {
        let entries = DEFAULT_MENU_TITLES
            .iter()
            .enumerate()
            .map(|(i, title)| MenuEntry {
                title: (*title).to_string(),
                selected: i == 0,
            })
            .collect();
        Self {
            entries,
            header: page.unwrap_or(DEFAULT_MENU_TITLES[0]).to_string(),
        }
    }

    /// Select the entry at `index`
    ///
    /// Returns the navigation signal, or `None` for an out-of-range index
    /// (state unchanged).
    pub fn select(&mut self, index: usize) -> Option<UiSignal> {
        let title = self.entries.get(index)?.title.clone();
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.selected = i == index;
        }
        self.header = title.clone();
        Some(UiSignal::navigate(format!("?page={title}")))
    }

    /// Entries in display order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Current header title
    #[inline]
    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_dashboard() {
        let menu = MenuState::new();
        assert_eq!(menu.header(), "Dashboard");
        let selected: Vec<_> = menu.entries().iter().filter(|e| e.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title, "Dashboard");
    }

    #[test]
    fn query_parameter_sets_header_only() {
        let menu = MenuState::from_query(Some("Products"));
        assert_eq!(menu.header(), "Products");
        assert!(menu.entries()[0].selected);
    }

    #[test]
    fn select_moves_single_selection_and_signals_navigation() {
        let mut menu = MenuState::new();
        let signal = menu.select(2).unwrap();
        assert_eq!(signal, UiSignal::navigate("?page=Products"));
        assert_eq!(menu.header(), "Products");

        let selected: Vec<_> = menu
            .entries()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.selected)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(selected, [2]);
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut menu = MenuState::new();
        assert!(menu.select(9).is_none());
        assert_eq!(menu.header(), "Dashboard");
    }
}
