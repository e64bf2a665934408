//! FAQ entries and the category/search filter used by the FAQ page.

use serde::Serialize;

use crate::types::FaqId;

/// Category value that matches every entry.
pub const ALL: &str = "all";

/// A question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub id: FaqId,
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

/// A filter tab on the FAQ page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqCategory {
    pub key: &'static str,
    pub label: &'static str,
}

pub static CATEGORIES: &[FaqCategory] = &[
    FaqCategory { key: ALL, label: "All Questions" },
    FaqCategory { key: "orders", label: "Orders" },
    FaqCategory { key: "shipping", label: "Shipping" },
    FaqCategory { key: "returns", label: "Returns & Refunds" },
    FaqCategory { key: "payment", label: "Payment" },
    FaqCategory { key: "account", label: "Account" },
];

const fn entry(
    id: u32,
    category: &'static str,
    question: &'static str,
    answer: &'static str,
) -> FaqEntry {
    FaqEntry {
        id: FaqId::new(id),
        category,
        question,
        answer,
    }
}

static ENTRIES: &[FaqEntry] = &[
    entry(
        1,
        "orders",
        "How do I place an order?",
        "Browse our collections, choose your size and add items to your bag. When you are ready, open the bag and follow the checkout steps.",
    ),
    entry(
        2,
        "orders",
        "Can I change or cancel my order?",
        "Orders can be changed or cancelled within one hour of purchase. Contact our support team with your order ID and we will do our best to help.",
    ),
    entry(
        3,
        "orders",
        "How can I track my order?",
        "Use the Track Order page with the order ID from your confirmation email. You will see the current status, carrier and delivery estimate.",
    ),
    entry(
        4,
        "shipping",
        "How long does shipping take?",
        "Standard shipping takes 5-7 business days, express takes 2-3 business days and overnight orders placed before noon arrive the next business day.",
    ),
    entry(
        5,
        "shipping",
        "Do you ship internationally?",
        "We ship to over 40 countries. International delivery usually takes 7-14 business days and duties are calculated at checkout.",
    ),
    entry(
        6,
        "shipping",
        "Is shipping free?",
        "Standard shipping is free on orders over $100. Express and overnight rates are shown at checkout.",
    ),
    entry(
        7,
        "returns",
        "What is your return policy?",
        "Unworn items with their tags attached can be returned within 30 days of delivery for a full refund to the original payment method.",
    ),
    entry(
        8,
        "returns",
        "How long do refunds take?",
        "Once your return reaches our warehouse we inspect it within 2 business days. Refunds then take 5-10 business days to appear, depending on your bank.",
    ),
    entry(
        9,
        "returns",
        "Can I exchange an item for a different size?",
        "Yes. Start an exchange from your account or contact us, and we will ship the new size as soon as the original is on its way back.",
    ),
    entry(
        10,
        "returns",
        "Are sale items returnable?",
        "Sale items can be returned within 14 days for store credit. Final-sale pieces are marked on the product page and cannot be returned.",
    ),
    entry(
        11,
        "payment",
        "Which payment methods do you accept?",
        "We accept all major credit cards, Apple Pay, Google Pay and PayPal. Gift cards can be combined with any other method.",
    ),
    entry(
        12,
        "payment",
        "Is my payment information secure?",
        "Payments are processed by a PCI-compliant provider over an encrypted connection. We never store your full card details.",
    ),
    entry(
        13,
        "account",
        "How do I reset my password?",
        "Choose Forgot Password on the sign-in page, enter your email and we will send you a 6-digit code to set a new password.",
    ),
    entry(
        14,
        "account",
        "Do I need an account to order?",
        "No, guest checkout is available. An account lets you track orders, save addresses and request a refund or exchange in a few clicks.",
    ),
];

/// All entries in display order.
#[must_use]
pub fn entries() -> &'static [FaqEntry] {
    ENTRIES
}

/// Look up a filter tab by key.
#[must_use]
pub fn find_category(key: &str) -> Option<&'static FaqCategory> {
    CATEGORIES.iter().find(|c| c.key == key)
}

/// Category + free-text filter over FAQ entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqFilter<'q> {
    category: &'q str,
    query: &'q str,
}

impl<'q> FaqFilter<'q> {
    /// Build a filter. An empty category behaves like `all`; the query is
    /// trimmed and an empty query matches everything.
    #[must_use]
    pub fn new(category: &'q str, query: &'q str) -> Self {
        let category = if category.is_empty() { ALL } else { category };
        Self {
            category,
            query: query.trim(),
        }
    }

    /// Whether `entry` passes both predicates.
    #[must_use]
    pub fn matches(&self, entry: &FaqEntry) -> bool {
        let in_category = self.category == ALL || entry.category == self.category;
        in_category && self.matches_text(entry)
    }

    fn matches_text(&self, entry: &FaqEntry) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        entry.question.to_lowercase().contains(&needle)
            || entry.answer.to_lowercase().contains(&needle)
    }

    /// Matching entries in their original order.
    #[must_use]
    pub fn apply<'a>(&self, entries: &'a [FaqEntry]) -> Vec<&'a FaqEntry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }

    /// Number of entries per tab for the current search text.
    #[must_use]
    pub fn counts(&self, entries: &[FaqEntry]) -> Vec<(&'static FaqCategory, usize)> {
        CATEGORIES
            .iter()
            .map(|cat| {
                let per_tab = FaqFilter {
                    category: cat.key,
                    query: self.query,
                };
                (cat, entries.iter().filter(|e| per_tab.matches(e)).count())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_search_across_all_categories() {
        let results = FaqFilter::new(ALL, "refund").apply(entries());
        assert!(!results.is_empty());
        for entry in &results {
            let text = format!("{} {}", entry.question, entry.answer).to_lowercase();
            assert!(text.contains("refund"), "{} does not mention refund", entry.id);
        }

        let expected = entries()
            .iter()
            .filter(|e| {
                e.question.to_lowercase().contains("refund")
                    || e.answer.to_lowercase().contains("refund")
            })
            .count();
        assert_eq!(results.len(), expected);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let lower = FaqFilter::new(ALL, "refund").apply(entries());
        let upper = FaqFilter::new(ALL, "  REFUND ").apply(entries());
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_category_and_query_combine() {
        let results = FaqFilter::new("returns", "refund").apply(entries());
        assert!(results.iter().all(|e| e.category == "returns"));
        let ids: Vec<u32> = results.iter().map(|e| e.id.as_u32()).collect();
        assert_eq!(ids, vec![7, 8]);
    }

    #[test]
    fn test_empty_query_returns_category() {
        let results = FaqFilter::new("payment", "").apply(entries());
        assert_eq!(results.len(), 2);

        let all = FaqFilter::new("", "").apply(entries());
        assert_eq!(all.len(), entries().len());
    }

    #[test]
    fn test_no_matches() {
        assert!(FaqFilter::new(ALL, "submarine").apply(entries()).is_empty());
    }

    #[test]
    fn test_counts_follow_query() {
        let counts = FaqFilter::new("orders", "refund").counts(entries());
        let all = counts.iter().find(|(c, _)| c.key == ALL).map(|(_, n)| *n);
        let returns = counts.iter().find(|(c, _)| c.key == "returns").map(|(_, n)| *n);
        assert_eq!(returns, Some(2));
        assert_eq!(all, Some(FaqFilter::new(ALL, "refund").apply(entries()).len()));
    }

    #[test]
    fn test_every_entry_has_known_category() {
        for entry in entries() {
            assert!(find_category(entry.category).is_some());
        }
    }
}
