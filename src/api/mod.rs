//! Magento 2 Web API module
//!
//! The authenticated request pipeline: token lifecycle management, the
//! `searchCriteria` query builder, response classification, bounded retry on
//! transient platform errors, and the per-endpoint resource operations built
//! on top of them.

pub mod auth;
pub mod client;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod query;
pub mod resilience;
pub mod response;
pub mod token_store;

pub use auth::{Authenticator, TokenSource};
pub use client::MagentoClient;
pub use endpoints::ShipmentRequest;
pub use error::{Error, Result};
pub use models::{Credentials, Token};
pub use query::{
    ConditionType, Filter, FilterGroup, FilterValue, SearchCriteria, SearchCriteriaBuilder,
    SortOrder,
};
pub use resilience::{RetryConfig, RetryPolicy};
pub use response::{classify, Outcome};
pub use token_store::TokenStore;
