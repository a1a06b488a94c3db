//! One-call-per-endpoint resource operations
//!
//! Mechanical glue: each method builds a URL and body and sends it through
//! the authenticated request pipeline. Search endpoints take a
//! [`SearchCriteria`](crate::api::query::SearchCriteria) rendered into the
//! platform's query grammar before the call.

mod carts;
mod catalog;
mod categories;
mod cms;
mod customers;
mod inventory;
mod sales;
mod store;

pub use sales::ShipmentRequest;
