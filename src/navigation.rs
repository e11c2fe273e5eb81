/// Height of the fixed header that anchored sections must clear.
pub const HEADER_OFFSET: f64 = 70.0;
pub const ACTIVE_CLASS: &str = "active";
/// Where the hero's scroll indicator leads.
pub const SCROLL_INDICATOR_TARGET: &str = "#about";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        href: "#home",
    },
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Skills",
        href: "#skills",
    },
    NavLink {
        label: "Projects",
        href: "#projects",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

impl NavLink {
    pub fn section_id(&self) -> Option<&'static str> {
        fragment_target(self.href)
    }
}

/// Open/closed state shared by the mobile toggle and the menu panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[cfg(test)]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    pub fn class(self) -> Option<&'static str> {
        self.open.then_some(ACTIVE_CLASS)
    }
}

/// Element id named by a same-page `#fragment` href.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_destination(element_top: f64) -> f64 {
    element_top - HEADER_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_between_open_and_closed() {
        let menu = MobileMenu::default();

        assert!(!menu.is_open());
        assert!(menu.toggled().is_open());
        assert!(!menu.toggled().toggled().is_open());
        assert_eq!(menu.toggled().class(), Some("active"));
        assert_eq!(menu.class(), None);
    }

    #[test]
    fn closing_is_idempotent() {
        let open = MobileMenu::default().toggled();

        assert_eq!(open.closed(), MobileMenu::default());
        assert_eq!(open.closed().closed(), MobileMenu::default());
    }

    #[test]
    fn only_same_page_fragments_resolve() {
        assert_eq!(fragment_target("#projects"), Some("projects"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/resume.pdf"), None);
        assert_eq!(fragment_target("https://example.com/#about"), None);
    }

    #[test]
    fn destination_clears_fixed_header() {
        assert_eq!(scroll_destination(900.0), 830.0);
        assert_eq!(scroll_destination(0.0), -70.0);
    }

    #[test]
    fn every_nav_link_names_a_section() {
        for link in NAV_LINKS {
            assert!(link.section_id().is_some(), "{} has no fragment", link.label);
        }
        assert_eq!(fragment_target(SCROLL_INDICATOR_TARGET), Some("about"));
    }
}
