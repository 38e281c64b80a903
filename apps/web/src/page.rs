//! Page-level state for the single-page portfolio: navigation and the contact form.

use std::sync::Arc;

use crate::contact_form::ContactForm;
use crate::transport::ContactTransport;

/// Scroll offset (px from the viewport top) that decides the active section.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Sections in page order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Element id of the section anchor.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Vertical extent of a rendered section relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

/// State owned by the page component. One instance per session.
pub struct PageState {
    active_section: Section,
    menu_open: bool,
    contact: ContactForm,
}

impl PageState {
    pub fn new(transport: Arc<dyn ContactTransport>) -> Self {
        Self {
            active_section: Section::default(),
            menu_open: false,
            contact: ContactForm::new(transport),
        }
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Navigation click: the page scrolls to `section` and the mobile menu closes.
    /// The active section itself follows the scroll position, not the click.
    pub fn navigate_to(&mut self, section: Section) -> &'static str {
        self.menu_open = false;
        section.id()
    }

    /// Scroll handler. The first section (in page order) spanning the offset
    /// line becomes active; if none does, the previous value is kept.
    pub fn on_scroll<I>(&mut self, bounds: I)
    where
        I: IntoIterator<Item = (Section, SectionBounds)>,
    {
        let current = bounds.into_iter().find_map(|(section, rect)| {
            (rect.top <= ACTIVE_SECTION_OFFSET && rect.bottom >= ACTIVE_SECTION_OFFSET)
                .then_some(section)
        });
        if let Some(section) = current {
            self.active_section = section;
        }
    }
}
