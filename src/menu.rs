use std::rc::Rc;

use log::debug;
use yew::prelude::*;

/// Open/closed state of the mobile navigation overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            return self;
        }
        debug!("mobile menu {}", if open { "opened" } else { "closed" });
        Rc::new(MenuState { open })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: MenuState, actions: &[MenuAction]) -> MenuState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(*action);
        }
        *state
    }

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().open);
    }

    #[test]
    fn double_toggle_is_identity() {
        for open in [false, true] {
            let start = MenuState { open };
            assert_eq!(apply(start, &[MenuAction::Toggle, MenuAction::Toggle]), start);
        }
    }

    #[test]
    fn close_always_lands_closed() {
        for open in [false, true] {
            assert!(!apply(MenuState { open }, &[MenuAction::Close]).open);
        }
    }

    #[test]
    fn unchanged_state_keeps_the_same_allocation() {
        let closed = Rc::new(MenuState::default());
        let after = closed.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&closed, &after));
    }
}
