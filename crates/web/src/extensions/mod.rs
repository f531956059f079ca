//! Extension traits

mod cart;
mod depot;
mod result;

#[cfg(test)]
pub(crate) use cart::CART_SESSION_KEY;
pub(crate) use cart::CartSessionExt as _;
pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
