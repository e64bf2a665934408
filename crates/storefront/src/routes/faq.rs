//! FAQ page with category tabs, free-text search and an expanded entry.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::Query;
use serde::Deserialize;
use tracing::instrument;

use atelier_core::faq::{self, FaqFilter};

use crate::filters;
use crate::middleware::CspNonce;
use crate::routes::query::lenient;
use crate::shell::PageShell;

/// FAQ query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct FaqQuery {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub q: String,
    /// ID of the expanded entry.
    #[serde(default, deserialize_with = "lenient")]
    pub open: Option<u32>,
}

/// Category filter tab.
#[derive(Debug, Clone)]
pub struct FaqTab {
    pub label: &'static str,
    pub count: usize,
    pub selected: bool,
    pub href: String,
}

/// A question in the result list.
#[derive(Debug, Clone)]
pub struct FaqItem {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    pub open: bool,
    pub toggle_href: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub shell: PageShell,
    pub category: &'static str,
    pub query: String,
    pub tabs: Vec<FaqTab>,
    pub items: Vec<FaqItem>,
}

fn faq_href(category: &str, query: &str, open: Option<u32>) -> String {
    let mut params = Vec::new();
    if category != faq::ALL {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if !query.is_empty() {
        params.push(format!("q={}", urlencoding::encode(query)));
    }
    if let Some(id) = open {
        params.push(format!("open={id}"));
    }
    if params.is_empty() {
        "/faq".to_string()
    } else {
        format!("/faq?{}", params.join("&"))
    }
}

/// Display the FAQ page.
///
/// Unknown categories fall back to `all`.
#[instrument(skip(nonce))]
pub async fn faq(nonce: CspNonce, Query(query): Query<FaqQuery>) -> FaqTemplate {
    let category = faq::find_category(&query.category).map_or(faq::ALL, |c| c.key);
    let search = query.q.trim();
    let filter = FaqFilter::new(category, search);

    let tabs = filter
        .counts(faq::entries())
        .into_iter()
        .map(|(tab, count)| FaqTab {
            label: tab.label,
            count,
            selected: tab.key == category,
            href: faq_href(tab.key, search, None),
        })
        .collect();

    let items = filter
        .apply(faq::entries())
        .into_iter()
        .map(|entry| {
            let id = entry.id.as_u32();
            let open = query.open == Some(id);
            FaqItem {
                id,
                question: entry.question,
                answer: entry.answer,
                open,
                toggle_href: faq_href(category, search, (!open).then_some(id)),
            }
        })
        .collect();

    FaqTemplate {
        shell: PageShell::new("Frequently Asked Questions", &nonce)
            .describe("Answers about orders, shipping, returns, payment and your account."),
        category,
        query: search.to_string(),
        tabs,
        items,
    }
}
