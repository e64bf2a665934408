//! Track Order route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use atelier_core::orders::{self, LookupError, Order};
use atelier_core::types::OrderStatus;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::CspNonce;
use crate::shell::PageShell;
use crate::state::AppState;

const DATE_FORMAT: &str = "%B %-d, %Y";
const DATE_TIME_FORMAT: &str = "%b %-d, %Y at %-I:%M %p";

#[derive(Debug, Clone)]
pub struct ItemRow {
    pub name: &'static str,
    pub image: &'static str,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

#[derive(Debug, Clone)]
pub struct EventRow {
    pub label: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub at: Option<String>,
}

/// A progress bar step.
#[derive(Debug, Clone)]
pub struct StepRow {
    pub label: &'static str,
    pub reached: bool,
    pub current: bool,
}

/// Order panel data.
#[derive(Debug, Clone)]
pub struct OrderView {
    pub order_id: &'static str,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub progress: usize,
    pub steps: Vec<StepRow>,
    pub placed_at: String,
    pub estimated_delivery: String,
    pub carrier: &'static str,
    pub tracking_number: &'static str,
    pub items: Vec<ItemRow>,
    pub subtotal: String,
    pub address_lines: Vec<String>,
    pub timeline: Vec<EventRow>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        let address = &order.shipping_address;
        Self {
            order_id: order.order_id,
            status_label: order.status.label(),
            status_class: order.status.css_class(),
            progress: order.progress_percent(),
            steps: OrderStatus::ALL
                .iter()
                .map(|step| StepRow {
                    label: step.label(),
                    reached: order.status.has_reached(*step),
                    current: order.status == *step,
                })
                .collect(),
            placed_at: order.placed_at.format(DATE_FORMAT).to_string(),
            estimated_delivery: order.estimated_delivery.format(DATE_FORMAT).to_string(),
            carrier: order.carrier,
            tracking_number: order.tracking_number,
            items: order
                .items
                .iter()
                .map(|item| ItemRow {
                    name: item.name,
                    image: item.image,
                    quantity: item.quantity,
                    price: item.price().display(),
                    line_total: item.line_total().display(),
                })
                .collect(),
            subtotal: order.subtotal().display(),
            address_lines: vec![
                address.name.to_string(),
                address.line1.to_string(),
                format!("{}, {} {}", address.city, address.region, address.postal_code),
                address.country.to_string(),
            ],
            timeline: order
                .timeline
                .iter()
                .map(|event| EventRow {
                    label: event.status.label(),
                    description: event.description,
                    location: event.location,
                    at: event
                        .at
                        .map(|at| at.format(DATE_TIME_FORMAT).to_string()),
                })
                .collect(),
        }
    }
}

/// Track order page template.
#[derive(Template, WebTemplate)]
#[template(path = "track_order.html")]
pub struct TrackOrderTemplate {
    pub shell: PageShell,
    pub order_id: String,
    pub order: Option<OrderView>,
    pub error: Option<String>,
}

impl TrackOrderTemplate {
    fn new(nonce: &CspNonce, order_id: String) -> Self {
        Self {
            shell: PageShell::new("Track Your Order", nonce)
                .describe("Check the status of your Atelier order."),
            order_id,
            order: None,
            error: None,
        }
    }
}

/// Look up an order after the simulated network delay and render the page.
///
/// Not-found renders the inline message with 404 and no order panel; blank
/// input renders its message with 422.
async fn render_lookup(state: &AppState, nonce: &CspNonce, input: String) -> Response {
    tokio::time::sleep(state.config().latency.track_order).await;

    let result = orders::lookup(&input);
    let mut page = TrackOrderTemplate::new(nonce, input);

    match result {
        Ok(order) => {
            tracing::info!(order_id = order.order_id, status = %order.status, "Order found");
            add_breadcrumb(
                "track_order",
                "Order looked up",
                Some(&[("order_id", order.order_id)]),
            );
            page.order = Some(OrderView::from(order));
            page.into_response()
        }
        Err(e) => {
            let status = match &e {
                LookupError::Empty => StatusCode::UNPROCESSABLE_ENTITY,
                LookupError::NotFound(id) => {
                    tracing::info!(order_id = %id, "Order not found");
                    StatusCode::NOT_FOUND
                }
            };
            page.error = Some(e.to_string());
            (status, page).into_response()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TrackOrderQuery {
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
}

/// Display the track order page, looking up `?orderId=` when present.
#[instrument(skip(state, nonce))]
pub async fn show(
    State(state): State<AppState>,
    nonce: CspNonce,
    Query(query): Query<TrackOrderQuery>,
) -> Response {
    match query.order_id.filter(|id| !id.trim().is_empty()) {
        Some(id) => render_lookup(&state, &nonce, id).await,
        None => TrackOrderTemplate::new(&nonce, String::new()).into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct TrackOrderForm {
    #[serde(default, rename = "orderId")]
    pub order_id: String,
}

/// Look up the order number submitted in the form.
#[instrument(skip(state, nonce))]
pub async fn submit(
    State(state): State<AppState>,
    nonce: CspNonce,
    Form(form): Form<TrackOrderForm>,
) -> Response {
    render_lookup(&state, &nonce, form.order_id).await
}
