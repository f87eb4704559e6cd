//! Card markup for one comparison group.

use leptos::prelude::*;

use crate::util::deal_cards::{DealCardView, OfferRowView};

/// One slide in the deal carousel.
#[component]
pub fn DealCard(card: DealCardView) -> impl IntoView {
    let DealCardView { badge, product, offers, verdict } = card;

    view! {
        <div class="slide">
            <div class="card best">
                <div class="best-tag">{badge}</div>
                <h2>{product}</h2>
                {offers.into_iter().map(|row| view! { <OfferRow row=row/> }).collect_view()}
                <p class="verdict">{verdict}</p>
            </div>
        </div>
    }
}

/// Seller and price line. Sellers with a link open it in a new tab.
#[component]
fn OfferRow(row: OfferRowView) -> impl IntoView {
    let OfferRowView { seller, href, price_label } = row;
    let seller = match href {
        Some(href) => view! {
            <a href=href target="_blank" rel="noopener noreferrer">
                {seller}
            </a>
        }
        .into_any(),
        None => seller.into_any(),
    };

    view! {
        <div class="offer">
            <span class="seller">{seller}</span>
            <strong>{price_label}</strong>
        </div>
    }
}
