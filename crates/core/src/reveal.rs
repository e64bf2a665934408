//! Shutter open animation and staggered section reveal timings.
//!
//! Every page starts behind two half-height panels. On load the top panel
//! slides up and the bottom panel slides down; when that finishes the page
//! is marked visible and each section fades in after its own delay.

use serde::Serialize;

/// Shutter slide duration.
pub const SHUTTER_DURATION_MS: u32 = 1200;

/// Easing for the shutter panels.
pub const SHUTTER_EASING: &str = "cubic-bezier(0.76, 0, 0.24, 1)";

/// How long the loading flag stays set after mount.
pub const LOADING_DELAY_MS: u32 = 500;

/// Delay before the first section appears.
pub const SECTION_BASE_DELAY_MS: u32 = 200;

/// Extra delay per subsequent section.
pub const SECTION_STAGGER_MS: u32 = 150;

/// Timings handed to the page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealPlan {
    pub shutter_ms: u32,
    pub easing: &'static str,
    pub loading_ms: u32,
    pub base_delay_ms: u32,
    pub stagger_ms: u32,
}

impl Default for RevealPlan {
    fn default() -> Self {
        Self {
            shutter_ms: SHUTTER_DURATION_MS,
            easing: SHUTTER_EASING,
            loading_ms: LOADING_DELAY_MS,
            base_delay_ms: SECTION_BASE_DELAY_MS,
            stagger_ms: SECTION_STAGGER_MS,
        }
    }
}

impl RevealPlan {
    /// Reveal delay for the section at `index` (0-based).
    #[must_use]
    pub fn delay(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_delay_ms
            .saturating_add(index.saturating_mul(self.stagger_ms))
    }

    /// When the last of `sections` sections starts revealing, measured from
    /// the end of the shutter.
    #[must_use]
    pub fn last_section_at(&self, sections: usize) -> u32 {
        self.delay(sections.saturating_sub(1))
    }

    /// Inline CSS custom properties for the shell's `<body>`.
    #[must_use]
    pub fn css_variables(&self) -> String {
        format!(
            "--shutter-duration: {}ms; --shutter-easing: {}; --loading-delay: {}ms;",
            self.shutter_ms, self.easing, self.loading_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_are_staggered() {
        let plan = RevealPlan::default();
        assert_eq!(plan.delay(0), 200);
        assert_eq!(plan.delay(1), 350);
        assert_eq!(plan.delay(4), 800);
        assert_eq!(plan.last_section_at(5), 800);
        assert_eq!(plan.last_section_at(0), 200);
    }

    #[test]
    fn test_delay_saturates() {
        let plan = RevealPlan::default();
        assert_eq!(plan.delay(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_css_variables() {
        let css = RevealPlan::default().css_variables();
        assert!(css.contains("--shutter-duration: 1200ms"));
        assert!(css.contains("cubic-bezier(0.76, 0, 0.24, 1)"));
        assert!(css.contains("--loading-delay: 500ms"));
    }
}
