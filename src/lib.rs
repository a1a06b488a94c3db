//! A client library for the Magento 2 REST API.
//!
//! Authenticates once against the admin token endpoint, reuses the token
//! across calls (optionally across processes through a locked token file),
//! translates structured filters into the platform's `searchCriteria` query
//! grammar, and transparently retries the platform's transient database
//! deadlock responses.

pub mod api;

pub use api::{
    classify, Authenticator, ConditionType, Credentials, Error, Filter, FilterGroup, FilterValue,
    MagentoClient, Outcome, Result, RetryConfig, RetryPolicy, SearchCriteria,
    SearchCriteriaBuilder, ShipmentRequest, SortOrder, Token, TokenSource, TokenStore,
};
