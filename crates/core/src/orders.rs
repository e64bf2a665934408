//! Mock orders for the Track Order page.
//!
//! Two fixed records are looked up by order number. Input is trimmed and
//! uppercased first, so `ord-2024-001234` finds `ORD-2024-001234`.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::types::{OrderStatus, Price};

/// Order lookup failures, shown inline on the Track Order page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Please enter an order ID.")]
    Empty,
    #[error("Order not found. Please check your order ID and try again.")]
    NotFound(String),
}

/// A purchased line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    pub name: &'static str,
    pub quantity: u32,
    pub price_cents: u32,
    pub image: &'static str,
}

impl OrderItem {
    #[must_use]
    pub fn price(&self) -> Price {
        Price::from_cents(self.price_cents)
    }

    #[must_use]
    pub fn line_total(&self) -> Price {
        Price::from_cents(self.price_cents * self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingAddress {
    pub name: &'static str,
    pub line1: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
}

/// One step of the tracking history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingEvent {
    pub status: OrderStatus,
    pub description: &'static str,
    pub location: &'static str,
    /// `None` for steps not reached yet.
    pub at: Option<NaiveDateTime>,
}

impl TrackingEvent {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub order_id: &'static str,
    pub status: OrderStatus,
    pub placed_at: NaiveDate,
    pub estimated_delivery: NaiveDate,
    pub carrier: &'static str,
    pub tracking_number: &'static str,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub timeline: Vec<TrackingEvent>,
}

impl Order {
    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        Price::from_cents(
            self.items
                .iter()
                .map(|item| item.price_cents * item.quantity)
                .sum(),
        )
    }

    /// Progress through the shipment steps as a percentage.
    #[must_use]
    pub fn progress_percent(&self) -> usize {
        let last = OrderStatus::ALL.len() - 1;
        self.status.step() * 100 / last
    }
}

/// Normalize user input into the canonical order number form.
#[must_use]
pub fn normalize_order_id(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Look up an order by number.
///
/// # Errors
///
/// Returns [`LookupError::Empty`] for blank input and
/// [`LookupError::NotFound`] when no record matches.
pub fn lookup(input: &str) -> Result<&'static Order, LookupError> {
    let id = normalize_order_id(input);
    if id.is_empty() {
        return Err(LookupError::Empty);
    }
    ORDERS
        .iter()
        .find(|order| order.order_id == id)
        .ok_or(LookupError::NotFound(id))
}

/// All mock orders.
#[must_use]
pub fn orders() -> &'static [Order] {
    &ORDERS
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid calendar date")
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Option<NaiveDateTime> {
    date(y, m, d).and_hms_opt(h, min, 0)
}

static ORDERS: LazyLock<Vec<Order>> = LazyLock::new(|| {
    vec![
        Order {
            order_id: "ORD-2024-001234",
            status: OrderStatus::InTransit,
            placed_at: date(2024, 3, 10),
            estimated_delivery: date(2024, 3, 16),
            carrier: "FedEx",
            tracking_number: "7489 2011 5563",
            items: vec![
                OrderItem {
                    name: "Linen Wrap Dress",
                    quantity: 1,
                    price_cents: 8900,
                    image: "/static/images/products/linen-wrap-dress.jpg",
                },
                OrderItem {
                    name: "Gold Hoop Earrings",
                    quantity: 2,
                    price_cents: 3900,
                    image: "/static/images/products/gold-hoop-earrings.jpg",
                },
            ],
            shipping_address: ShippingAddress {
                name: "Sarah Johnson",
                line1: "123 Main Street, Apt 4B",
                city: "New York",
                region: "NY",
                postal_code: "10001",
                country: "United States",
            },
            timeline: vec![
                TrackingEvent {
                    status: OrderStatus::Processing,
                    description: "Order confirmed and payment received",
                    location: "Online",
                    at: at(2024, 3, 10, 14, 32),
                },
                TrackingEvent {
                    status: OrderStatus::Shipped,
                    description: "Package handed to carrier",
                    location: "Los Angeles, CA",
                    at: at(2024, 3, 11, 9, 15),
                },
                TrackingEvent {
                    status: OrderStatus::InTransit,
                    description: "Arrived at regional sorting facility",
                    location: "Chicago, IL",
                    at: at(2024, 3, 13, 22, 47),
                },
                TrackingEvent {
                    status: OrderStatus::OutForDelivery,
                    description: "With local courier for delivery",
                    location: "New York, NY",
                    at: None,
                },
                TrackingEvent {
                    status: OrderStatus::Delivered,
                    description: "Delivered to recipient",
                    location: "New York, NY",
                    at: None,
                },
            ],
        },
        Order {
            order_id: "ORD-2024-005678",
            status: OrderStatus::Delivered,
            placed_at: date(2024, 2, 20),
            estimated_delivery: date(2024, 2, 26),
            carrier: "UPS",
            tracking_number: "1Z 999 AA1 0123 4567 84",
            items: vec![OrderItem {
                name: "Leather Tote",
                quantity: 1,
                price_cents: 14900,
                image: "/static/images/products/leather-tote.jpg",
            }],
            shipping_address: ShippingAddress {
                name: "Michael Chen",
                line1: "456 Oak Avenue",
                city: "San Francisco",
                region: "CA",
                postal_code: "94102",
                country: "United States",
            },
            timeline: vec![
                TrackingEvent {
                    status: OrderStatus::Processing,
                    description: "Order confirmed and payment received",
                    location: "Online",
                    at: at(2024, 2, 20, 10, 5),
                },
                TrackingEvent {
                    status: OrderStatus::Shipped,
                    description: "Package handed to carrier",
                    location: "Portland, OR",
                    at: at(2024, 2, 21, 8, 40),
                },
                TrackingEvent {
                    status: OrderStatus::InTransit,
                    description: "Departed regional facility",
                    location: "Sacramento, CA",
                    at: at(2024, 2, 23, 18, 12),
                },
                TrackingEvent {
                    status: OrderStatus::OutForDelivery,
                    description: "With local courier for delivery",
                    location: "San Francisco, CA",
                    at: at(2024, 2, 25, 7, 55),
                },
                TrackingEvent {
                    status: OrderStatus::Delivered,
                    description: "Delivered to front desk",
                    location: "San Francisco, CA",
                    at: at(2024, 2, 25, 14, 20),
                },
            ],
        },
    ]
});
