use biodata_types::ViewName;

/// One entry of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub view: ViewName,
    pub active: bool,
}

/// Tracks which of the three views is rendered.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    active: ViewName,
}

impl Navigator {
    pub fn new(start: ViewName) -> Self {
        Self { active: start }
    }

    pub fn active(&self) -> ViewName {
        self.active
    }

    pub fn is_active(&self, view: ViewName) -> bool {
        self.active == view
    }

    /// Switch the active view. Returns the view that was active before.
    pub fn navigate(&mut self, view: ViewName) -> ViewName {
        let previous = self.active;
        if previous != view {
            tracing::debug!(from = %previous, to = %view, "navigate");
        }
        self.active = view;
        previous
    }

    /// Navigation affordance state, derived only from the active view
    pub fn nav_items(&self) -> [NavItem; 3] {
        ViewName::ALL.map(|view| NavItem {
            view,
            active: view == self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_requested_view() {
        assert_eq!(Navigator::default().active(), ViewName::Home);
        assert_eq!(Navigator::new(ViewName::Profile).active(), ViewName::Profile);
    }

    #[test]
    fn test_navigate_returns_previous() {
        let mut nav = Navigator::default();
        assert_eq!(nav.navigate(ViewName::Edit), ViewName::Home);
        assert!(nav.is_active(ViewName::Edit));
    }

    #[test]
    fn test_exactly_one_item_active() {
        let mut nav = Navigator::default();
        nav.navigate(ViewName::Profile);

        let items = nav.nav_items();
        let active: Vec<ViewName> = items.iter().filter(|i| i.active).map(|i| i.view).collect();
        assert_eq!(active, vec![ViewName::Profile]);
        assert_eq!(items[0].view, ViewName::Home);
    }
}
