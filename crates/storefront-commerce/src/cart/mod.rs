//! Shopping cart module.
//!
//! Contains the session cart and its derived totals.

mod ledger;
mod totals;

pub use ledger::{Cart, CartLine, LineChange};
pub use totals::{CartLineView, CartTotals};
