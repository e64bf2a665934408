//! Hot deals carousel: static deals and index arithmetic.
//!
//! The visible item count follows the viewport width. The index is always
//! in `0..=max_index` where `max_index = max(0, total - visible)`; `next`
//! and `prev` wrap at either end.

use std::sync::LazyLock;

use serde::Serialize;

use crate::types::{DealId, Price};

/// Number of deals in the carousel.
pub const DEAL_COUNT: usize = 10;

/// Auto-advance interval.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;

/// Width assumed when the client has not reported one.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// A promotional deal card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deal {
    pub id: DealId,
    pub title: String,
    pub price_cents: u32,
    pub original_price_cents: u32,
    pub discount: u8,
    pub image: String,
}

impl Deal {
    #[must_use]
    pub fn price(&self) -> Price {
        Price::from_cents(self.price_cents)
    }

    #[must_use]
    pub fn original_price(&self) -> Price {
        Price::from_cents(self.original_price_cents)
    }
}

const DEAL_TITLES: [&str; DEAL_COUNT] = [
    "Linen Essentials",
    "Knitwear Edit",
    "Weekend Bags",
    "Fine Jewellery",
    "Tailored Trousers",
    "Silk Scarves",
    "Outerwear Preview",
    "Home Textiles",
    "Leather Goods",
    "Ceramics Studio",
];

static DEALS: LazyLock<Vec<Deal>> = LazyLock::new(|| {
    DEAL_TITLES
        .iter()
        .zip(1u32..)
        .map(|(title, n)| {
            // 20% to 50% off in 5-point steps.
            let discount = 20 + (n % 7) * 5;
            let original_price_cents = 4_900 + n * 1_500;
            let price_cents = original_price_cents * (100 - discount) / 100;
            Deal {
                id: DealId::new(n),
                title: (*title).to_string(),
                price_cents,
                original_price_cents,
                discount: u8::try_from(discount).unwrap_or(u8::MAX),
                image: format!("/static/images/deals/deal-{n}.jpg"),
            }
        })
        .collect()
});

/// The ten static deals.
#[must_use]
pub fn deals() -> &'static [Deal] {
    &DEALS
}

/// Items shown at once for a viewport width in CSS pixels.
#[must_use]
pub const fn visible_for_width(width: u32) -> usize {
    match width {
        0..640 => 1,
        640..1024 => 2,
        1024..1280 => 3,
        _ => 4,
    }
}

/// What the client asked the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselAction {
    #[default]
    Stay,
    Next,
    Prev,
    /// Autoplay tick; ignored while paused.
    Tick,
}

impl CarouselAction {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "next" => Self::Next,
            "prev" => Self::Prev,
            "tick" => Self::Tick,
            _ => Self::Stay,
        }
    }
}

/// Position of the carousel window over `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    total: usize,
    visible: usize,
    index: usize,
    paused: bool,
}

impl Carousel {
    /// Start at index 0 for the given viewport width.
    #[must_use]
    pub const fn new(total: usize, viewport_width: u32) -> Self {
        Self {
            total,
            visible: visible_for_width(viewport_width),
            index: 0,
            paused: false,
        }
    }

    /// Restore a carousel at a client-reported index, clamped into range.
    #[must_use]
    pub fn at(total: usize, viewport_width: u32, index: usize) -> Self {
        let mut carousel = Self::new(total, viewport_width);
        carousel.index = index.min(carousel.max_index());
        carousel
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn visible(&self) -> usize {
        self.visible
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Largest valid index.
    #[must_use]
    pub const fn max_index(&self) -> usize {
        self.total.saturating_sub(self.visible)
    }

    /// Advance one item, wrapping to 0 from the last position.
    pub const fn next(&mut self) {
        self.index = if self.index >= self.max_index() {
            0
        } else {
            self.index + 1
        };
    }

    /// Go back one item, wrapping to the last position from 0.
    pub const fn prev(&mut self) {
        self.index = if self.index == 0 {
            self.max_index()
        } else {
            self.index - 1
        };
    }

    /// Autoplay step: `next` unless paused.
    pub const fn tick(&mut self) {
        if !self.paused {
            self.next();
        }
    }

    pub const fn pause(&mut self) {
        self.paused = true;
    }

    pub const fn resume(&mut self) {
        self.paused = false;
    }

    /// Recompute the visible count after a resize and clamp the index.
    pub fn resize(&mut self, viewport_width: u32) {
        self.visible = visible_for_width(viewport_width);
        self.index = self.index.min(self.max_index());
    }

    pub const fn apply(&mut self, action: CarouselAction) {
        match action {
            CarouselAction::Stay => {}
            CarouselAction::Next => self.next(),
            CarouselAction::Prev => self.prev(),
            CarouselAction::Tick => self.tick(),
        }
    }

    /// Range of item positions currently in view.
    #[must_use]
    pub fn window(&self) -> std::ops::Range<usize> {
        self.index..(self.index + self.visible).min(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: [u32; 6] = [320, 639, 640, 1023, 1024, 1920];

    #[test]
    fn test_ten_deals_with_consistent_prices() {
        assert_eq!(deals().len(), DEAL_COUNT);
        for deal in deals() {
            assert!(deal.price_cents < deal.original_price_cents);
            assert!((20..=50).contains(&deal.discount));
        }
    }

    #[test]
    fn test_visible_breakpoints() {
        assert_eq!(visible_for_width(320), 1);
        assert_eq!(visible_for_width(640), 2);
        assert_eq!(visible_for_width(1023), 2);
        assert_eq!(visible_for_width(1024), 3);
        assert_eq!(visible_for_width(1280), 4);
    }

    #[test]
    fn test_index_never_exceeds_max() {
        for width in WIDTHS {
            let mut carousel = Carousel::new(DEAL_COUNT, width);
            let max = DEAL_COUNT.saturating_sub(visible_for_width(width));
            for _ in 0..50 {
                carousel.next();
                assert!(carousel.index() <= max);
            }
            for _ in 0..50 {
                carousel.prev();
                assert!(carousel.index() <= max);
            }
        }
    }

    #[test]
    fn test_next_wraps_to_zero() {
        let mut carousel = Carousel::at(DEAL_COUNT, 1920, 99);
        assert_eq!(carousel.index(), 6);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut carousel = Carousel::new(DEAL_COUNT, 320);
        carousel.prev();
        assert_eq!(carousel.index(), 9);
    }

    #[test]
    fn test_fewer_items_than_visible() {
        let mut carousel = Carousel::new(2, 1920);
        assert_eq!(carousel.max_index(), 0);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.prev();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.window(), 0..2);
    }

    #[test]
    fn test_resize_clamps_index() {
        let mut carousel = Carousel::at(DEAL_COUNT, 320, 9);
        assert_eq!(carousel.index(), 9);
        carousel.resize(1920);
        assert_eq!(carousel.index(), 6);
        assert_eq!(carousel.window(), 6..10);
    }

    #[test]
    fn test_tick_respects_pause() {
        let mut carousel = Carousel::new(DEAL_COUNT, 1024);
        carousel.pause();
        carousel.apply(CarouselAction::Tick);
        assert_eq!(carousel.index(), 0);
        carousel.resume();
        carousel.apply(CarouselAction::Tick);
        assert_eq!(carousel.index(), 1);
    }
}
