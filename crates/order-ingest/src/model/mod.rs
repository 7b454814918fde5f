//! Plain data types: the stored [`Order`], its public [`OrderView`] and the [`CreateOrder`] request.

pub mod order;

pub use order::*;
