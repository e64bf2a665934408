//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Shipment progress of an order, in the order it advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    InTransit,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    /// All statuses in progression order.
    pub const ALL: [Self; 5] = [
        Self::Processing,
        Self::Shipped,
        Self::InTransit,
        Self::OutForDelivery,
        Self::Delivered,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::InTransit => "In Transit",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
        }
    }

    /// Zero-based position in the progress bar.
    #[must_use]
    pub const fn step(self) -> usize {
        match self {
            Self::Processing => 0,
            Self::Shipped => 1,
            Self::InTransit => 2,
            Self::OutForDelivery => 3,
            Self::Delivered => 4,
        }
    }

    /// CSS modifier used by the status badge.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Processing => "status--processing",
            Self::Shipped => "status--shipped",
            Self::InTransit => "status--in-transit",
            Self::OutForDelivery => "status--out-for-delivery",
            Self::Delivered => "status--delivered",
        }
    }

    /// Whether `other` has been reached once the order is in this status.
    #[must_use]
    pub fn has_reached(self, other: Self) -> bool {
        self >= other
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
