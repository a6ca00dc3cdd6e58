//! # investX Engine
//!
//! Recommendation engine for the investX product recommender.
//!
//! Given a fitted [`investx_core::VectorSpace`] and the product table it was
//! fitted over, the engine ranks rows by cosine similarity to the user query,
//! selects the top-k, and allocates the requested amount proportionally to
//! the similarity scores.
//!
//! ## Example
//!
//! ```rust
//! use investx_core::{ProductRow, ProductSlot, ProductTable, Vectorizer};
//! use investx_engine::{recommend, Period, ProductCount, Query, RiskProfile};
//!
//! let table = ProductTable::from_rows(vec![ProductRow {
//!     profile: Some("Moderate".to_string()),
//!     initial_investment_amount: Some("5000".to_string()),
//!     initial_period: Some("6 meses a 1 ano".to_string()),
//!     slots: [Some(ProductSlot::new("Funds", "FU-11")), None, None],
//! }]);
//! let space = Vectorizer::default().fit(&table).unwrap();
//!
//! let query = Query::new(
//!     RiskProfile::Moderate,
//!     5000.0,
//!     ProductCount::new(1).unwrap(),
//!     Period::SixMonthsToOneYear,
//! )
//! .unwrap();
//!
//! let recommendation = recommend(&query, &space, &table).unwrap();
//! assert_eq!(recommendation.products.len(), 1);
//! ```

pub mod advisor;
pub mod query;
pub mod recommend;
pub mod report;

pub use advisor::Advisor;
pub use query::{Period, ProductCount, Query, RiskProfile, MAX_AMOUNT};
pub use recommend::recommend;
pub use report::{format_currency, render, Recommendation, RecommendedProduct};
