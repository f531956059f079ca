//! Notices
//!
//! Texts shown to the shopper as flash messages or placeholder responses.

use crate::melons::Melon;

/// Flashed when checkout is attempted.
pub const CHECKOUT_NOT_IMPLEMENTED: &str =
    "Sorry! Checkout will be implemented in a future version.";

/// Returned when the login form is submitted.
pub const LOGIN_NOT_IMPLEMENTED: &str = "Oops! This needs to be implemented";

/// Confirmation flashed after a melon is added to the cart.
pub fn added_to_cart(melon: &Melon) -> String {
    let melon_type = melon.common_name.to_lowercase();
    let article = indefinite_article(&melon_type);

    format!("Successfully added {article} {melon_type} melon to your cart.")
}

/// `an` before a vowel, `a` otherwise.
pub fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
