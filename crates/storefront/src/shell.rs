//! The page shell shared by every template.
//!
//! `templates/base.html` renders the shutter panels, the fixed header with
//! its back button, and the loading flag. Each page passes a [`PageShell`]
//! carrying its title and the reveal timings; section delays are emitted as
//! CSS rules inside a nonce'd `<style>` block since the CSP forbids inline
//! `style` attributes.

use std::fmt::Write as _;

use atelier_core::reveal::RevealPlan;

use crate::middleware::CspNonce;

/// Number of `data-reveal` slots a page may use.
pub const REVEAL_SLOTS: usize = 12;

/// Site name appended to every `<title>`.
pub const SITE_NAME: &str = "Atelier";

/// Layout data every page template carries as `shell`.
#[derive(Debug, Clone)]
pub struct PageShell {
    pub title: String,
    pub description: String,
    pub nonce: String,
    pub reveal: RevealPlan,
    pub back_href: &'static str,
}

impl PageShell {
    /// Shell for a page titled `title`, going back to the home page.
    #[must_use]
    pub fn new(title: impl Into<String>, nonce: &CspNonce) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            nonce: nonce.value().to_string(),
            reveal: RevealPlan::default(),
            back_href: "/",
        }
    }

    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn site_name(&self) -> &'static str {
        SITE_NAME
    }

    /// Where the header's back button leads.
    #[must_use]
    pub const fn back_to(mut self, href: &'static str) -> Self {
        self.back_href = href;
        self
    }

    /// Milliseconds from load until the last reveal slot has started.
    #[must_use]
    pub fn settle_ms(&self) -> u32 {
        self.reveal
            .shutter_ms
            .saturating_add(self.reveal.last_section_at(REVEAL_SLOTS))
    }

    /// CSS custom properties plus one transition delay rule per reveal slot.
    #[must_use]
    pub fn reveal_css(&self) -> String {
        let mut css = format!(":root {{ {} }}", self.reveal.css_variables());
        for slot in 0..REVEAL_SLOTS {
            let _ = write!(
                css,
                " [data-reveal=\"{slot}\"] {{ transition-delay: {}ms; }}",
                self.reveal.delay(slot)
            );
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_css_has_staggered_slots() {
        let shell = PageShell::new("About", &CspNonce("n".to_string()));
        let css = shell.reveal_css();
        assert!(css.starts_with(":root { --shutter-duration: 1200ms;"));
        assert!(css.contains("--shutter-easing: cubic-bezier(0.76, 0, 0.24, 1);"));
        assert!(css.contains("[data-reveal=\"0\"] { transition-delay: 200ms; }"));
        assert!(css.contains("[data-reveal=\"2\"] { transition-delay: 500ms; }"));
        assert!(css.contains("[data-reveal=\"11\"]"));
        assert!(!css.contains("[data-reveal=\"12\"]"));
    }

    #[test]
    fn test_builder() {
        let shell = PageShell::new("Terms", &CspNonce("abc".to_string()))
            .describe("Terms of service")
            .back_to("/about");
        assert_eq!(shell.nonce, "abc");
        assert_eq!(shell.description, "Terms of service");
        assert_eq!(shell.back_href, "/about");
        // 1200 + 200 + 11 * 150
        assert_eq!(shell.settle_ms(), 3050);
    }
}
