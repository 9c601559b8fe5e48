/// The page's full-screen blocks, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Laboratory,
    SignatureDrinks,
    Reviews,
    FindUs,
}

pub const SECTIONS: [Section; 6] = [
    Section::Home,
    Section::About,
    Section::Laboratory,
    Section::SignatureDrinks,
    Section::Reviews,
    Section::FindUs,
];

impl Section {
    /// Element id of the section in the rendered document.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Laboratory => "laboratory",
            Section::SignatureDrinks => "signature-drinks",
            Section::Reviews => "reviews",
            Section::FindUs => "find-us",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::About => "ABOUT",
            Section::Laboratory => "LABORATORY",
            Section::SignatureDrinks => "COCKTAILS",
            Section::Reviews => "REVIEWS",
            Section::FindUs => "CONTACT",
        }
    }

    pub fn index(self) -> usize {
        SECTIONS.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Section {
        SECTIONS[index.min(SECTIONS.len() - 1)]
    }
}

/// Index of the section in view, assuming every section is one viewport tall.
///
/// Always a valid index into a list of `count` sections: scrolling past the
/// last offset clamps to the final section, and overscroll (negative offsets)
/// or a degenerate viewport height resolve to the first.
pub fn active_index(scroll_y: f64, viewport_height: f64, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    if viewport_height.is_nan() || viewport_height <= 0.0 || !scroll_y.is_finite() || scroll_y <= 0.0 {
        return 0;
    }
    let raw = (scroll_y / viewport_height).floor();
    let last = count - 1;
    if raw >= last as f64 {
        last
    } else {
        raw as usize
    }
}

/// Section targeted by the hero's "scroll to next" chevron.
pub fn next_section(active: usize) -> Section {
    Section::from_index(active.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ids_follow_document_order() {
        let ids: Vec<_> = SECTIONS.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            ["home", "about", "laboratory", "signature-drinks", "reviews", "find-us"]
        );
    }

    #[test]
    fn index_round_trips_through_from_index() {
        for (i, section) in SECTIONS.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(Section::from_index(i), *section);
        }
        assert_eq!(Section::from_index(99), Section::FindUs);
    }

    #[test]
    fn top_of_page_is_home() {
        assert_eq!(active_index(0.0, 800.0, 6), 0);
        assert_eq!(active_index(0.0, 1.0, 6), 0);
    }

    #[test]
    fn known_offsets_with_800px_viewport() {
        assert_eq!(active_index(1600.0, 800.0, 6), 2);
        assert_eq!(active_index(1599.0, 800.0, 6), 1);
        assert_eq!(active_index(10_000.0, 800.0, 6), 5);
    }

    #[test]
    fn degenerate_inputs_resolve_to_first_section() {
        assert_eq!(active_index(-40.0, 800.0, 6), 0);
        assert_eq!(active_index(500.0, 0.0, 6), 0);
        assert_eq!(active_index(500.0, f64::NAN, 6), 0);
        assert_eq!(active_index(f64::NAN, 800.0, 6), 0);
        assert_eq!(active_index(500.0, 800.0, 0), 0);
    }

    #[test]
    fn next_section_stops_at_the_last_one() {
        assert_eq!(next_section(0), Section::About);
        assert_eq!(next_section(4), Section::FindUs);
        assert_eq!(next_section(5), Section::FindUs);
        assert_eq!(next_section(usize::MAX), Section::FindUs);
    }

    proptest! {
        #[test]
        fn matches_clamped_floor(s in 0.0f64..1.0e7, h in 1.0f64..5000.0, n in 1usize..20) {
            let expected = ((s / h).floor() as usize).min(n - 1);
            prop_assert_eq!(active_index(s, h, n), expected);
        }

        #[test]
        fn monotonic_in_scroll_offset(a in 0.0f64..1.0e6, b in 0.0f64..1.0e6, h in 1.0f64..5000.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(active_index(lo, h, SECTIONS.len()) <= active_index(hi, h, SECTIONS.len()));
        }
    }
}
