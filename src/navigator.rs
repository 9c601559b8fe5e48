use log::debug;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::menu::MenuAction;
use crate::sections::Section;

/// Something that can bring an element, looked up by id, into view.
pub trait ScrollHost {
    /// Returns false when no element carries `id`.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// The live browser document.
pub struct DocumentHost;

impl ScrollHost for DocumentHost {
    fn scroll_into_view(&self, id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Smooth-scrolls to the section with `id`. Missing targets are a silent no-op.
pub fn scroll_to_section(host: &impl ScrollHost, id: &str) -> bool {
    let found = host.scroll_into_view(id);
    if found {
        debug!("scrolling to #{}", id);
    } else {
        debug!("no element #{} to scroll to", id);
    }
    found
}

/// Handles a click on a navigation entry. The menu closes only when the
/// section was actually scrolled to.
pub fn select_section(host: &impl ScrollHost, section: Section) -> Option<MenuAction> {
    scroll_to_section(host, section.id()).then_some(MenuAction::Close)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use yew::functional::Reducible;

    use super::*;
    use crate::menu::MenuState;
    use crate::sections::SECTIONS;

    struct FakeDocument {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeDocument {
        fn with_sections() -> Self {
            FakeDocument {
                ids: SECTIONS.iter().map(|s| s.id()).collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }

        fn without(missing: Section) -> Self {
            let mut doc = FakeDocument::with_sections();
            doc.ids.retain(|id| *id != missing.id());
            doc
        }
    }

    impl ScrollHost for FakeDocument {
        fn scroll_into_view(&self, id: &str) -> bool {
            if self.ids.contains(&id) {
                self.scrolled.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    fn apply(menu: Rc<MenuState>, action: Option<MenuAction>) -> Rc<MenuState> {
        match action {
            Some(action) => menu.reduce(action),
            None => menu,
        }
    }

    #[test]
    fn scrolls_to_existing_section() {
        let doc = FakeDocument::with_sections();
        assert!(scroll_to_section(&doc, "reviews"));
        assert_eq!(*doc.scrolled.borrow(), vec!["reviews".to_string()]);
    }

    #[test]
    fn selecting_any_item_closes_an_open_menu() {
        let doc = FakeDocument::with_sections();
        for section in SECTIONS {
            let action = select_section(&doc, section);
            assert_eq!(action, Some(MenuAction::Close));
            let menu = Rc::new(MenuState { open: true });
            assert!(!apply(menu, action).open);
        }
    }

    #[test]
    fn missing_target_changes_nothing() {
        let doc = FakeDocument::without(Section::Reviews);
        let action = select_section(&doc, Section::Reviews);
        assert_eq!(action, None);
        let menu = Rc::new(MenuState { open: true });
        let after = apply(menu.clone(), action);
        assert!(Rc::ptr_eq(&menu, &after));
        assert!(after.open);
        assert!(doc.scrolled.borrow().is_empty());
    }

    #[test]
    fn unknown_id_is_a_silent_no_op() {
        let doc = FakeDocument::with_sections();
        assert!(!scroll_to_section(&doc, "cellar"));
        assert!(doc.scrolled.borrow().is_empty());
    }
}
