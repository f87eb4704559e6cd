//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the comparison page chrome and results while reading
//! and writing shared state from Leptos context providers.

pub mod deal_card;
pub mod deal_carousel;
pub mod search_bar;
pub mod theme_toggle;
