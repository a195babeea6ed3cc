// Page view state
// One immutable value, a closed set of named actions.

use leptos::prelude::*;

/// Audience segment selected in the header switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Segment {
    #[default]
    Proveedores,
    Duenos,
}

impl Segment {
    pub fn label(self) -> &'static str {
        match self {
            Segment::Proveedores => "Proveedores",
            Segment::Duenos => "Dueños",
        }
    }

    /// Accent class read by every button whose color follows the segment.
    pub fn accent_class(self) -> &'static str {
        match self {
            Segment::Proveedores => "accent-orange",
            Segment::Duenos => "accent-teal",
        }
    }

    /// Full class list for a CTA button under this segment.
    pub fn cta_class(self) -> &'static str {
        match self {
            Segment::Proveedores => "btn btn-cta accent-orange",
            Segment::Duenos => "btn btn-cta accent-teal",
        }
    }

    /// Class for a switch pill labelled `self` when `active` is selected.
    pub fn switch_class(self, active: Segment) -> &'static str {
        if self == active {
            "switch-pill active"
        } else {
            "switch-pill"
        }
    }
}

/// The page sections that can appear in the document, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    About,
    Services,
    Plans,
    Partners,
    Contact,
    Faq,
}

/// Which sections render for a given segment.
///
/// Hero and About pitch the platform to providers; Partners only makes
/// sense for owners. Everything else is shared.
pub fn visible_sections(segment: Segment) -> &'static [SectionId] {
    use SectionId::*;
    match segment {
        Segment::Proveedores => &[Hero, About, Services, Plans, Contact, Faq],
        Segment::Duenos => &[Services, Plans, Partners, Contact, Faq],
    }
}

/// Maps a vertical scroll offset to the header shadow flag.
pub fn scrolled_from_offset(offset: f64) -> bool {
    offset > 0.0
}

/// All mutable UI state for one page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    pub menu_open: bool,
    pub segment: Segment,
    pub scrolled: bool,
}

impl PageState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Every anchor navigation closes the mobile menu, open or not.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn set_segment(&mut self, segment: Segment) {
        self.segment = segment;
    }

    pub fn set_scrolled(&mut self, scrolled: bool) {
        self.scrolled = scrolled;
    }

    pub fn is_visible(&self, section: SectionId) -> bool {
        visible_sections(self.segment).contains(&section)
    }
}

/// Grabs the page state signal provided by `App`.
pub fn use_page() -> RwSignal<PageState> {
    expect_context::<RwSignal<PageState>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_state_defaults() {
        let state = PageState::default();
        assert_eq!(state.segment, Segment::Proveedores);
        assert!(!state.menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn toggle_menu_twice_is_identity() {
        let mut state = PageState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert_eq!(state, PageState::default());
    }

    #[test]
    fn close_menu_from_either_prior_state() {
        let mut open = PageState {
            menu_open: true,
            ..Default::default()
        };
        open.close_menu();
        assert!(!open.menu_open);

        let mut closed = PageState::default();
        closed.close_menu();
        assert!(!closed.menu_open);
    }

    #[test]
    fn segment_switch_flips_cta_accent_and_back() {
        let mut state = PageState::default();
        assert_eq!(state.segment.accent_class(), "accent-orange");

        state.set_segment(Segment::Duenos);
        assert_eq!(state.segment.accent_class(), "accent-teal");
        assert_eq!(state.segment.cta_class(), "btn btn-cta accent-teal");

        state.set_segment(Segment::Proveedores);
        assert_eq!(state.segment.accent_class(), "accent-orange");
        assert_eq!(state.segment.cta_class(), "btn btn-cta accent-orange");
    }

    #[test]
    fn switch_pill_marks_only_the_active_segment() {
        let active = Segment::Duenos;
        assert_eq!(Segment::Duenos.switch_class(active), "switch-pill active");
        assert_eq!(Segment::Proveedores.switch_class(active), "switch-pill");
    }

    #[test]
    fn scrolled_tracks_offset_transitions() {
        assert!(!scrolled_from_offset(0.0));
        assert!(scrolled_from_offset(1.0));
        assert!(scrolled_from_offset(480.5));
        assert!(!scrolled_from_offset(0.0));
    }

    #[test]
    fn provider_segment_shows_hero_and_about_but_no_partners() {
        let state = PageState::default();
        assert!(state.is_visible(SectionId::Hero));
        assert!(state.is_visible(SectionId::About));
        assert!(!state.is_visible(SectionId::Partners));
    }

    #[test]
    fn owner_segment_shows_partners_but_no_hero_or_about() {
        let state = PageState {
            segment: Segment::Duenos,
            ..Default::default()
        };
        assert!(state.is_visible(SectionId::Partners));
        assert!(!state.is_visible(SectionId::Hero));
        assert!(!state.is_visible(SectionId::About));
    }

    #[test]
    fn shared_sections_render_for_both_segments() {
        use SectionId::*;
        for segment in [Segment::Proveedores, Segment::Duenos] {
            let visible = visible_sections(segment);
            for section in [Services, Plans, Contact, Faq] {
                assert!(visible.contains(&section), "{segment:?} must show {section:?}");
            }
        }
    }
}
