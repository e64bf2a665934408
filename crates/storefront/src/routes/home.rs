//! Home page and the hot deals carousel fragment.
//!
//! The carousel renders server-side at a default width. htmx then polls
//! `/partials/hot-deals` for autoplay and on next/prev, swapping the whole
//! `#hot-deals` element; `static/js/site.js` adds the real viewport width
//! and the hover pause to each request. Without JavaScript the prev/next
//! links reload the home page at the new `?deal=`.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::Query;
use serde::Deserialize;
use tracing::instrument;

use atelier_core::carousel::{
    self, AUTOPLAY_INTERVAL_MS, Carousel, CarouselAction, DEAL_COUNT, DEFAULT_VIEWPORT_WIDTH,
};

use crate::filters;
use crate::middleware::CspNonce;
use crate::routes::query::{flag, lenient, lenient_or_default};
use crate::shell::PageShell;

/// A deal card as rendered in the track.
#[derive(Debug, Clone)]
pub struct DealCard {
    pub title: String,
    pub image: String,
    pub price: String,
    pub original_price: String,
    pub discount: u8,
    pub in_view: bool,
}

/// Rendered carousel state.
#[derive(Debug, Clone)]
pub struct CarouselView {
    pub deals: Vec<DealCard>,
    pub index: usize,
    pub visible: usize,
    pub max_index: usize,
    pub viewport: u32,
    pub paused: bool,
    pub interval_ms: u32,
    /// Fallback links for browsers without JavaScript.
    pub prev_href: String,
    pub next_href: String,
}

impl CarouselView {
    fn new(carousel: &Carousel, viewport: u32) -> Self {
        let window = carousel.window();
        let deals = carousel::deals()
            .iter()
            .enumerate()
            .map(|(position, deal)| DealCard {
                title: deal.title.clone(),
                image: deal.image.clone(),
                price: deal.price().display(),
                original_price: deal.original_price().display(),
                discount: deal.discount,
                in_view: window.contains(&position),
            })
            .collect();

        let step = |action: CarouselAction| {
            let mut moved = *carousel;
            moved.apply(action);
            format!("/?deal={}&viewport={viewport}", moved.index())
        };

        Self {
            deals,
            index: carousel.index(),
            visible: carousel.visible(),
            max_index: carousel.max_index(),
            viewport,
            paused: carousel.is_paused(),
            interval_ms: AUTOPLAY_INTERVAL_MS,
            prev_href: step(CarouselAction::Prev),
            next_href: step(CarouselAction::Next),
        }
    }
}

/// Home page query parameters (no-JS carousel navigation).
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    #[serde(default, deserialize_with = "lenient")]
    pub deal: Option<usize>,
    #[serde(default, deserialize_with = "lenient")]
    pub viewport: Option<u32>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: PageShell,
    pub carousel: CarouselView,
}

/// Display the home page.
#[instrument(skip(nonce))]
pub async fn home(nonce: CspNonce, Query(query): Query<HomeQuery>) -> HomeTemplate {
    let viewport = query.viewport.unwrap_or(DEFAULT_VIEWPORT_WIDTH);
    let carousel = Carousel::at(DEAL_COUNT, viewport, query.deal.unwrap_or(0));

    HomeTemplate {
        shell: PageShell::new("Home", &nonce)
            .describe("Considered clothing, accessories and homeware, made to last."),
        carousel: CarouselView::new(&carousel, viewport),
    }
}

/// Carousel fragment query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct HotDealsQuery {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub index: usize,
    #[serde(default, deserialize_with = "lenient")]
    pub viewport: Option<u32>,
    #[serde(default)]
    pub action: String,
    #[serde(default, deserialize_with = "flag")]
    pub paused: bool,
}

/// Hot deals track fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/hot_deals.html")]
pub struct HotDealsTemplate {
    pub carousel: CarouselView,
}

/// Apply a carousel action and re-render the track.
///
/// The client sends its current index and viewport width; a width change
/// clamps the index to the new maximum.
#[instrument]
pub async fn hot_deals(Query(query): Query<HotDealsQuery>) -> HotDealsTemplate {
    let viewport = query.viewport.unwrap_or(DEFAULT_VIEWPORT_WIDTH);
    let mut carousel = Carousel::at(DEAL_COUNT, viewport, query.index);
    if query.paused {
        carousel.pause();
    }
    carousel.apply(CarouselAction::parse(&query.action));

    HotDealsTemplate {
        carousel: CarouselView::new(&carousel, viewport),
    }
}
