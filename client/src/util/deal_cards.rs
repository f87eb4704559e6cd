//! View model for deal cards.
//!
//! DESIGN
//! ======
//! Maps comparison groups to plain card descriptions so the markup layer
//! only lays out fields. Everything here runs without a document, which keeps
//! formatting and link decisions unit-testable.

#[cfg(test)]
#[path = "deal_cards_test.rs"]
mod deal_cards_test;

use crate::net::types::{ComparisonGroup, Offer};

/// Badge shown on every card.
pub const BEST_DEAL_BADGE: &str = "BEST DEAL";

/// Currency prefix for displayed prices.
pub const CURRENCY_SYMBOL: char = '\u{20B9}';

/// One offer line inside a card.
#[derive(Clone, Debug, PartialEq)]
pub struct OfferRowView {
    pub seller: String,
    /// Outbound link; the seller renders as plain text when absent.
    pub href: Option<String>,
    pub price_label: String,
}

/// One rendered comparison group.
#[derive(Clone, Debug, PartialEq)]
pub struct DealCardView {
    pub badge: &'static str,
    pub product: String,
    pub offers: Vec<OfferRowView>,
    pub verdict: String,
}

/// Format a price with the rupee prefix using the shortest decimal form.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{CURRENCY_SYMBOL}{price}")
}

/// Build the row for a single offer. Blank links are treated as absent.
#[must_use]
pub fn offer_row(offer: &Offer) -> OfferRowView {
    OfferRowView {
        seller: offer.source.clone(),
        href: offer
            .link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_owned),
        price_label: format_price(offer.price),
    }
}

/// Build the card for one group, keeping offer order.
#[must_use]
pub fn deal_card(group: &ComparisonGroup) -> DealCardView {
    DealCardView {
        badge: BEST_DEAL_BADGE,
        product: group.product.clone(),
        offers: group.offers.iter().map(offer_row).collect(),
        verdict: group.verdict.clone(),
    }
}

/// Build all cards in response order.
#[must_use]
pub fn deal_cards(groups: &[ComparisonGroup]) -> Vec<DealCardView> {
    groups.iter().map(deal_card).collect()
}
