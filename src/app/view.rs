//! Page and tab selection.
//!
//! The page is addressed by a single navigation token: `""` for home and
//! `"/project-explorer"` for the explorer. Tokens arrive either from explicit
//! navigation or from moving through the [`NavigationHistory`].

pub const HOME_TOKEN: &str = "";
pub const EXPLORER_TOKEN: &str = "/project-explorer";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Explorer,
}

impl Page {
    /// Anything other than the explorer token, with or without a leading `#`, is home.
    pub fn from_token(token: &str) -> Self {
        match token.trim().trim_start_matches('#') {
            EXPLORER_TOKEN => Page::Explorer,
            _ => Page::Home,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Page::Home => HOME_TOKEN,
            Page::Explorer => EXPLORER_TOKEN,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "🏠 Home",
            Page::Explorer => "🔍 Project Explorer",
        }
    }
}

/// Tabs of a displayed analysis result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Activity,
    Community,
    Issues,
    Recommendations,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Activity, Tab::Community, Tab::Issues, Tab::Recommendations];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Activity => "📊 Activity",
            Tab::Community => "👥 Community",
            Tab::Issues => "🐛 Issues",
            Tab::Recommendations => "💡 Recommendations",
        }
    }
}

/// `active_tab` only matters while the explorer shows an analysis result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub page: Page,
    pub active_tab: Tab,
}

impl ViewState {
    pub fn from_token(token: &str) -> Self {
        Self {
            page: Page::from_token(token),
            active_tab: Tab::default(),
        }
    }

    /// React to a navigation token change. Returns `true` if the page changed.
    pub fn apply_token(&mut self, token: &str) -> bool {
        let page = Page::from_token(token);
        let changed = page != self.page;
        self.page = page;
        changed
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Called whenever a new analysis result arrives.
    pub fn reset_tab(&mut self) {
        self.active_tab = Tab::Activity;
    }
}

/// Back/forward history of navigation tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl NavigationHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: vec![initial.to_string()],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Record an explicit navigation; forward entries are discarded.
    pub fn push(&mut self, token: &str) {
        if self.current() == token {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(token.to_string());
        self.cursor += 1;
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new(HOME_TOKEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_parsing() {
        assert_eq!(Page::from_token(""), Page::Home);
        assert_eq!(Page::from_token("/project-explorer"), Page::Explorer);
        assert_eq!(Page::from_token("#/project-explorer"), Page::Explorer);
        assert_eq!(Page::from_token("/somewhere-else"), Page::Home);
        assert_eq!(Page::Explorer.token(), EXPLORER_TOKEN);
    }

    #[test]
    fn test_initial_state_from_token() {
        let view = ViewState::from_token("/project-explorer");
        assert_eq!(view.page, Page::Explorer);
        assert_eq!(view.active_tab, Tab::Activity);
    }

    #[test]
    fn test_apply_token() {
        let mut view = ViewState::default();
        assert!(view.apply_token(EXPLORER_TOKEN));
        assert!(!view.apply_token(EXPLORER_TOKEN));
        assert!(view.apply_token(HOME_TOKEN));
        assert_eq!(view.page, Page::Home);
    }

    #[test]
    fn test_reset_tab() {
        let mut view = ViewState::default();
        view.select_tab(Tab::Issues);
        assert_eq!(view.active_tab, Tab::Issues);
        view.reset_tab();
        assert_eq!(view.active_tab, Tab::Activity);
    }

    #[test]
    fn test_history_back_and_forward() {
        let mut history = NavigationHistory::default();
        assert!(!history.can_go_back());
        assert_eq!(history.back(), None);

        history.push(EXPLORER_TOKEN);
        history.push(EXPLORER_TOKEN);
        assert_eq!(history.current(), EXPLORER_TOKEN);

        assert_eq!(history.back(), Some(HOME_TOKEN));
        assert!(history.can_go_forward());
        assert_eq!(history.forward(), Some(EXPLORER_TOKEN));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = NavigationHistory::new(EXPLORER_TOKEN);
        history.push(HOME_TOKEN);
        history.back();
        history.push("/other");
        assert!(!history.can_go_forward());
        assert_eq!(history.current(), "/other");
    }
}
