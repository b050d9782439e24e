//! NavigationState - Active Page

use crate::app::navigation::ActivePage;

/// State for sidebar navigation
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub active_page: ActivePage,
}

impl NavigationState {
    /// Switch pages; returns whether the page changed
    pub fn navigate(&mut self, page: ActivePage) -> bool {
        if self.active_page == page {
            return false;
        }
        self.active_page = page;
        true
    }
}
