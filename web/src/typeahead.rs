//! DOM-free state for the typeahead selector.
//!
//! The view in `components::typeahead` forwards browser events here and
//! renders whatever this state says; every open/close and highlight rule
//! lives in this file so it can be tested without a browser.

/// Keys the selector reacts to. Anything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeaheadKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl TypeaheadKey {
    pub fn from_key_name(key: &str) -> Self {
        match key {
            "ArrowDown" => Self::ArrowDown,
            "ArrowUp" => Self::ArrowUp,
            "Enter" => Self::Enter,
            "Escape" => Self::Escape,
            _ => Self::Other,
        }
    }

    /// Whether the browser default should be suppressed for this key.
    pub fn is_navigation(self) -> bool {
        !matches!(self, Self::Other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeaheadState {
    options: &'static [&'static str],
    text: String,
    open: bool,
    highlighted: Option<usize>,
}

impl TypeaheadState {
    pub fn new(options: &'static [&'static str], committed: &str) -> Self {
        Self {
            options,
            text: committed.to_string(),
            open: false,
            highlighted: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Options containing the typed text, case-insensitively, in list order.
    pub fn filtered(&self) -> Vec<&'static str> {
        filter_options(self.options, &self.text)
    }

    pub fn shows_no_results(&self) -> bool {
        self.open && !self.text.is_empty() && self.filtered().is_empty()
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.open = true;
        self.highlighted = None;
    }

    pub fn focus(&mut self) {
        self.open = true;
    }

    /// Applies a key press. Returns the option to commit, if the key committed one.
    pub fn key(&mut self, key: TypeaheadKey) -> Option<String> {
        if !self.open && key != TypeaheadKey::ArrowDown {
            return None;
        }

        match key {
            TypeaheadKey::ArrowDown => {
                if !self.open {
                    self.open = true;
                    return None;
                }
                let len = self.filtered().len();
                self.highlighted = match self.highlighted {
                    None if len > 0 => Some(0),
                    Some(index) if index + 1 < len => Some(index + 1),
                    current => current,
                };
                None
            }
            TypeaheadKey::ArrowUp => {
                self.highlighted = match self.highlighted {
                    Some(0) | None => None,
                    Some(index) => Some(index - 1),
                };
                None
            }
            TypeaheadKey::Enter => {
                let filtered = self.filtered();
                let choice = match self.highlighted {
                    Some(index) => filtered.get(index).copied(),
                    None if filtered.len() == 1 => filtered.first().copied(),
                    None => None,
                };
                choice.map(|option| self.commit(option))
            }
            TypeaheadKey::Escape => {
                self.close();
                None
            }
            TypeaheadKey::Other => None,
        }
    }

    pub fn hover(&mut self, index: usize) {
        if index < self.filtered().len() {
            self.highlighted = Some(index);
        }
    }

    /// Commits the filtered entry at `index`, as a mouse click on it would.
    pub fn click(&mut self, index: usize) -> Option<String> {
        let option = self.filtered().get(index).copied()?;
        Some(self.commit(option))
    }

    /// Outside click: close without touching the text.
    pub fn dismiss(&mut self) {
        self.close();
    }

    /// Parent overwrote the committed value (e.g. form reset).
    pub fn sync_committed(&mut self, committed: &str) {
        if self.text != committed {
            self.text = committed.to_string();
            self.highlighted = None;
        }
    }

    fn commit(&mut self, option: &str) -> String {
        self.text = option.to_string();
        self.close();
        self.text.clone()
    }

    fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }
}

pub fn filter_options(options: &'static [&'static str], text: &str) -> Vec<&'static str> {
    let needle = text.to_lowercase();
    options
        .iter()
        .copied()
        .filter(|option| option.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[&str] = &[
        "Clothing",
        "Jewelry",
        "Cosmetics",
        "Accessories",
        "Beauty Products",
        "Other",
    ];

    fn open_state(text: &str) -> TypeaheadState {
        let mut state = TypeaheadState::new(OPTIONS, "");
        state.input(text);
        state
    }

    #[test]
    fn empty_text_matches_every_option() {
        assert_eq!(filter_options(OPTIONS, ""), OPTIONS.to_vec());
    }

    #[test]
    fn filtering_is_case_insensitive_substring_in_list_order() {
        assert_eq!(filter_options(OPTIONS, "CO"), vec!["Cosmetics"]);
        assert_eq!(
            filter_options(OPTIONS, "e"),
            vec!["Jewelry", "Cosmetics", "Accessories", "Beauty Products", "Other"]
        );
        assert!(filter_options(OPTIONS, "zzz").is_empty());
    }

    #[test]
    fn typing_opens_panel_and_clears_highlight() {
        let mut state = open_state("");
        state.key(TypeaheadKey::ArrowDown);
        assert_eq!(state.highlighted(), Some(0));

        state.input("j");
        assert!(state.is_open());
        assert_eq!(state.highlighted(), None);
        assert_eq!(state.text(), "j");
    }

    #[test]
    fn focus_opens_even_without_matches() {
        let mut state = TypeaheadState::new(OPTIONS, "nothing matches");
        state.focus();
        assert!(state.is_open());
        assert!(state.shows_no_results());
    }

    #[test]
    fn arrow_down_on_closed_panel_only_opens() {
        let mut state = TypeaheadState::new(OPTIONS, "");
        assert_eq!(state.key(TypeaheadKey::ArrowDown), None);
        assert!(state.is_open());
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn highlight_stays_in_range_under_repeated_presses() {
        let mut state = open_state("o");
        let len = state.filtered().len();
        for _ in 0..20 {
            state.key(TypeaheadKey::ArrowDown);
            assert!(state.highlighted().is_some_and(|index| index < len));
        }
        assert_eq!(state.highlighted(), Some(len - 1));

        for _ in 0..20 {
            state.key(TypeaheadKey::ArrowUp);
        }
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn arrow_down_with_empty_filter_keeps_no_highlight() {
        let mut state = open_state("zzz");
        state.key(TypeaheadKey::ArrowDown);
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn enter_commits_highlighted_entry() {
        let mut state = open_state("e");
        state.key(TypeaheadKey::ArrowDown);
        state.key(TypeaheadKey::ArrowDown);

        let committed = state.key(TypeaheadKey::Enter);
        assert_eq!(committed.as_deref(), Some("Cosmetics"));
        assert_eq!(state.text(), "Cosmetics");
        assert!(!state.is_open());
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn enter_commits_single_match_without_highlight() {
        let mut state = open_state("jew");
        assert_eq!(state.key(TypeaheadKey::Enter).as_deref(), Some("Jewelry"));
    }

    #[test]
    fn enter_with_several_matches_and_no_highlight_is_noop() {
        let mut state = open_state("e");
        assert_eq!(state.key(TypeaheadKey::Enter), None);
        assert!(state.is_open());
        assert_eq!(state.text(), "e");
    }

    #[test]
    fn escape_closes_but_keeps_text() {
        let mut state = open_state("cos");
        state.key(TypeaheadKey::ArrowDown);
        state.key(TypeaheadKey::Escape);
        assert!(!state.is_open());
        assert_eq!(state.highlighted(), None);
        assert_eq!(state.text(), "cos");
    }

    #[test]
    fn keys_other_than_arrow_down_are_ignored_while_closed() {
        let mut state = TypeaheadState::new(OPTIONS, "Jewelry");
        let before = state.clone();
        for key in [
            TypeaheadKey::ArrowUp,
            TypeaheadKey::Enter,
            TypeaheadKey::Escape,
            TypeaheadKey::Other,
        ] {
            assert_eq!(state.key(key), None);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn hover_and_keyboard_share_the_highlight() {
        let mut state = open_state("");
        state.hover(3);
        assert_eq!(state.highlighted(), Some(3));
        state.key(TypeaheadKey::ArrowDown);
        assert_eq!(state.highlighted(), Some(4));

        state.hover(42);
        assert_eq!(state.highlighted(), Some(4));
    }

    #[test]
    fn click_commits_filtered_entry() {
        let mut state = open_state("o");
        let expected = state.filtered()[1];
        assert_eq!(state.click(1).as_deref(), Some(expected));
        assert_eq!(state.text(), expected);
        assert!(!state.is_open());
        assert_eq!(state.click(99), None);
    }

    #[test]
    fn dismiss_closes_without_touching_text() {
        let mut state = open_state("acc");
        state.key(TypeaheadKey::ArrowDown);
        state.dismiss();
        assert!(!state.is_open());
        assert_eq!(state.highlighted(), None);
        assert_eq!(state.text(), "acc");
    }

    #[test]
    fn no_results_needs_open_panel_and_text() {
        let mut state = open_state("zzz");
        assert!(state.shows_no_results());
        state.input("");
        assert!(!state.shows_no_results());
        state.input("zzz");
        state.dismiss();
        assert!(!state.shows_no_results());
    }

    #[test]
    fn external_reset_resyncs_text_without_reopening() {
        let mut state = TypeaheadState::new(OPTIONS, "");
        state.focus();
        state.key(TypeaheadKey::ArrowDown);
        state.key(TypeaheadKey::Enter);
        assert_eq!(state.text(), "Clothing");

        state.sync_committed("");
        assert_eq!(state.text(), "");
        assert!(!state.is_open());
    }

    #[test]
    fn key_names_map_to_navigation_keys() {
        assert_eq!(TypeaheadKey::from_key_name("ArrowUp"), TypeaheadKey::ArrowUp);
        assert_eq!(TypeaheadKey::from_key_name("Tab"), TypeaheadKey::Other);
        assert!(TypeaheadKey::Escape.is_navigation());
        assert!(!TypeaheadKey::Other.is_navigation());
    }
}
