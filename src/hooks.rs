use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::sections::{active_index, SECTIONS};

fn viewport_height(window: &web_sys::Window) -> Option<f64> {
    window.inner_height().ok().and_then(|h| h.as_f64())
}

fn sample_active_index() -> Option<usize> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let height = viewport_height(&window)?;
    Some(active_index(scroll_y, height, SECTIONS.len()))
}

/// Runs `handler` on every window scroll event for the lifetime of the
/// calling component, and once right after mount.
#[hook]
fn use_window_scroll<F>(handler: F)
where
    F: Fn() + 'static,
{
    let handler = Rc::new(handler);

    {
        // Initial check
        let handler = handler.clone();
        use_effect_with_deps(
            move |_| {
                handler();
                || ()
            },
            (),
        );
    }

    use_event_with_window("scroll", move |_: Event| handler());
}

/// Index of the section currently in view, resampled on scroll and resize.
#[hook]
pub fn use_active_section() -> usize {
    let active = use_state_eq(|| 0usize);

    {
        let active = active.clone();
        use_window_scroll(move || {
            if let Some(index) = sample_active_index() {
                active.set(index);
            }
        });
    }

    {
        let active = active.clone();
        use_event_with_window("resize", move |_: Event| {
            if let Some(index) = sample_active_index() {
                active.set(index);
            }
        });
    }

    *active
}

/// Whether a box spanning `top..bottom` (viewport coordinates) overlaps the
/// viewport shrunk by `margin` pixels on both the top and bottom edge.
pub fn in_reveal_zone(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    let margin = margin.max(0.0);
    top < viewport_height - margin && bottom > margin
}

fn reveal_visible_blocks() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let (Some(document), Some(height)) = (window.document(), viewport_height(&window)) else {
        return;
    };
    let Ok(pending) = document.query_selector_all(".reveal:not(.revealed)") else {
        return;
    };
    for i in 0..pending.length() {
        let Some(element) = pending.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let margin = element
            .get_attribute("data-reveal-margin")
            .and_then(|m| m.parse::<f64>().ok())
            .unwrap_or(0.0);
        let rect = element.get_bounding_client_rect();
        if in_reveal_zone(rect.top(), rect.bottom(), height, margin) {
            let _ = element.class_list().add_1("revealed");
        }
    }
}

/// Adds `revealed` to every `.reveal` block the first time it enters the
/// viewport. Blocks never lose the class once set.
#[hook]
pub fn use_scroll_reveal() {
    use_window_scroll(reveal_visible_blocks);
    use_event_with_window("resize", |_: Event| reveal_visible_blocks());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_inside_viewport_is_revealed() {
        assert!(in_reveal_zone(100.0, 400.0, 800.0, 0.0));
    }

    #[test]
    fn block_below_the_fold_waits() {
        assert!(!in_reveal_zone(900.0, 1200.0, 800.0, 0.0));
        assert!(!in_reveal_zone(800.0, 1200.0, 800.0, 0.0));
    }

    #[test]
    fn block_scrolled_past_is_not_in_zone() {
        assert!(!in_reveal_zone(-600.0, -10.0, 800.0, 0.0));
    }

    #[test]
    fn margin_delays_entry() {
        assert!(in_reveal_zone(750.0, 1000.0, 800.0, 0.0));
        assert!(!in_reveal_zone(750.0, 1000.0, 800.0, 100.0));
        assert!(in_reveal_zone(650.0, 1000.0, 800.0, 100.0));
    }

    #[test]
    fn block_taller_than_viewport_counts() {
        assert!(in_reveal_zone(-500.0, 2000.0, 800.0, 200.0));
    }

    #[test]
    fn negative_margin_is_treated_as_zero() {
        assert_eq!(
            in_reveal_zone(790.0, 900.0, 800.0, -50.0),
            in_reveal_zone(790.0, 900.0, 800.0, 0.0)
        );
    }
}
