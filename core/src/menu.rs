#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    NavLinkClicked,
    EscapePressed,
    /// Mouse, touch or pen press landing outside both the menu and its
    /// toggle button.
    PointerDownOutside,
}

/// Open state of the compact (mobile) navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Returns `true` if the open state changed.
    pub fn apply(&mut self, event: MenuEvent) -> bool {
        let next = match event {
            MenuEvent::Toggle => !self.open,
            MenuEvent::NavLinkClicked
            | MenuEvent::EscapePressed
            | MenuEvent::PointerDownOutside => false,
        };
        let changed = next != self.open;
        self.open = next;
        changed
    }

    pub fn applied(mut self, event: MenuEvent) -> Self {
        self.apply(event);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_events_close_an_open_menu() {
        for event in [
            MenuEvent::NavLinkClicked,
            MenuEvent::EscapePressed,
            MenuEvent::PointerDownOutside,
        ] {
            let mut menu = MenuState::default().applied(MenuEvent::Toggle);
            assert!(menu.is_open());
            assert!(menu.apply(event));
            assert!(!menu.is_open());
        }
    }

    #[test]
    fn closing_events_on_closed_menu_are_noops() {
        let mut menu = MenuState::default();
        assert!(!menu.apply(MenuEvent::EscapePressed));
        assert!(!menu.apply(MenuEvent::PointerDownOutside));
        assert!(!menu.is_open());
    }

    #[test]
    fn toggle_flips() {
        let mut menu = MenuState::default();
        assert!(menu.apply(MenuEvent::Toggle));
        assert!(menu.apply(MenuEvent::Toggle));
        assert!(!menu.is_open());
    }
}
