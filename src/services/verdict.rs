//! Best-offer selection and verdict text.

use crate::providers::Listing;

const RUPEE: char = '\u{20B9}';

/// Cheapest listing; the first one wins ties. `None` for an empty slice.
#[must_use]
pub fn pick_best(listings: &[Listing]) -> Option<&Listing> {
    listings
        .iter()
        .reduce(|best, l| if l.price < best.price { l } else { best })
}

/// One-sentence explanation of why the cheapest offer is the deal.
///
/// With a single offer the sentence names it as the only seller; otherwise
/// it states the gap to the next-cheapest price. Empty input yields `None`.
#[must_use]
pub fn generate_verdict(listings: &[Listing]) -> Option<String> {
    let best = pick_best(listings)?;

    let mut prices: Vec<f64> = listings.iter().map(|l| l.price).collect();
    prices.sort_by(f64::total_cmp);

    let verdict = match prices.as_slice() {
        [_] => format!("Only one seller available: {} at {RUPEE}{}.", best.source, best.price),
        [lowest, next, ..] => format!(
            "{} offers the best price at {RUPEE}{}, {RUPEE}{} cheaper than the next option.",
            best.source,
            best.price,
            next - lowest
        ),
        [] => return None,
    };
    Some(verdict)
}
