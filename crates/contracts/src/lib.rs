//! Shared domain types and pure logic of the quotation form
//!
//! Everything here is free of DOM access so it can be unit-tested natively;
//! the `frontend` crate wires it to Leptos signals.

pub mod domain;
pub mod shared;
