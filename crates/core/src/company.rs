//! Static About and Shipping page tables.

use serde::Serialize;

use crate::types::Price;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShippingOption {
    pub name: &'static str,
    pub delivery: &'static str,
    pub price_cents: u32,
    /// Orders at or above this subtotal ship free with this option.
    pub free_over_cents: Option<u32>,
}

impl ShippingOption {
    #[must_use]
    pub fn price(&self) -> Price {
        Price::from_cents(self.price_cents)
    }

    #[must_use]
    pub fn free_over(&self) -> Option<Price> {
        self.free_over_cents.map(Price::from_cents)
    }

    /// Cost of this option for an order subtotal.
    #[must_use]
    pub fn cost_for(&self, subtotal_cents: u32) -> Price {
        match self.free_over_cents {
            Some(threshold) if subtotal_cents >= threshold => Price::from_cents(0),
            _ => self.price(),
        }
    }
}

pub static TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Elena Marchetti",
        role: "Founder & Creative Director",
        bio: "Elena spent a decade in Milanese ateliers before founding the studio to make fewer, better pieces.",
        image: "/static/images/team/elena.jpg",
    },
    TeamMember {
        name: "James Okafor",
        role: "Head of Design",
        bio: "James leads a small design team focused on natural fibres and timeless cuts.",
        image: "/static/images/team/james.jpg",
    },
    TeamMember {
        name: "Priya Raman",
        role: "Sourcing & Sustainability",
        bio: "Priya works directly with mills and workshops to trace every material we use.",
        image: "/static/images/team/priya.jpg",
    },
    TeamMember {
        name: "Lucas Weber",
        role: "Customer Experience",
        bio: "Lucas and his team make sure every order, return and question is handled with care.",
        image: "/static/images/team/lucas.jpg",
    },
];

pub static MILESTONES: &[Milestone] = &[
    Milestone {
        year: 2016,
        title: "The First Studio",
        description: "A single sewing table and a capsule collection of twelve pieces.",
    },
    Milestone {
        year: 2018,
        title: "Going Online",
        description: "Our online shop opened, shipping to customers across the country.",
    },
    Milestone {
        year: 2020,
        title: "Traceable Materials",
        description: "Every fabric in the collection became fully traceable to its mill.",
    },
    Milestone {
        year: 2022,
        title: "International Shipping",
        description: "We began shipping to more than 40 countries.",
    },
    Milestone {
        year: 2024,
        title: "Home Collection",
        description: "Ceramics and textiles made with partner workshops joined the line.",
    },
];

pub static VALUES: &[Value] = &[
    Value {
        title: "Craftsmanship",
        description: "Pieces made to last, finished by hand where it matters.",
    },
    Value {
        title: "Transparency",
        description: "We publish where and how every product is made.",
    },
    Value {
        title: "Sustainability",
        description: "Natural fibres, small batches and plastic-free packaging.",
    },
    Value {
        title: "Community",
        description: "Long-term partnerships with the people who make our clothes.",
    },
];

pub static SHIPPING_OPTIONS: &[ShippingOption] = &[
    ShippingOption {
        name: "Standard",
        delivery: "5-7 business days",
        price_cents: 595,
        free_over_cents: Some(10_000),
    },
    ShippingOption {
        name: "Express",
        delivery: "2-3 business days",
        price_cents: 1_495,
        free_over_cents: None,
    },
    ShippingOption {
        name: "Overnight",
        delivery: "Next business day",
        price_cents: 2_995,
        free_over_cents: None,
    },
    ShippingOption {
        name: "International",
        delivery: "7-14 business days",
        price_cents: 2_495,
        free_over_cents: Some(25_000),
    },
];

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_free_over_threshold() {
        let standard = &SHIPPING_OPTIONS[0];
        assert_eq!(standard.cost_for(9_999).display(), "$5.95");
        assert_eq!(standard.cost_for(10_000).display(), "$0.00");
    }

    #[test]
    fn test_express_never_free() {
        let express = &SHIPPING_OPTIONS[1];
        assert_eq!(express.cost_for(1_000_000).display(), "$14.95");
    }

    #[test]
    fn test_milestones_are_chronological() {
        assert!(MILESTONES.windows(2).all(|w| w[0].year < w[1].year));
    }
}
