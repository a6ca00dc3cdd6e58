//! # investX
//!
//! A small investment-product recommender.
//!
//! investX ingests semicolon-delimited tabular product data, fits a
//! bag-of-words vector space over the product descriptions, and recommends a
//! subset of products for a stated risk profile, amount, and horizon, with
//! the amount allocated proportionally to cosine similarity.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install investx
//! investx products.csv --profile moderate --amount 5000 --products 2 --period medium
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use investx::prelude::*;
//!
//! let advisor = Advisor::new();
//! advisor
//!     .process(&["products.csv"], Weighting::TermFrequency)
//!     .unwrap();
//!
//! let query = Query::new(
//!     RiskProfile::Moderate,
//!     5000.0,
//!     ProductCount::new(2).unwrap(),
//!     Period::SixMonthsToOneYear,
//! )
//! .unwrap();
//!
//! let recommendation = advisor.recommend(&query).unwrap();
//! println!("{}", recommendation.summary);
//! ```
//!
//! ## Crate Structure
//!
//! investX is composed of two crates:
//!
//! - [`investx-core`](https://docs.rs/investx-core) - Data model, CSV loader,
//!   term-frequency vectorizer, cosine similarity
//! - [`investx-engine`](https://docs.rs/investx-engine) - Query model, top-k
//!   ranking, proportional allocation, advisor session

// Re-export core types
pub use investx_core::{
    Error, ProductRow, ProductSlot, ProductTable, Result, Vector, VectorSpace, Vectorizer,
    Weighting,
};

// Re-export engine types
pub use investx_engine::{
    recommend, Advisor, Period, ProductCount, Query, Recommendation, RecommendedProduct,
    RiskProfile,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        recommend, Advisor, Error, Period, ProductCount, ProductRow, ProductSlot, ProductTable,
        Query, Recommendation, RecommendedProduct, Result, RiskProfile, Vector, VectorSpace,
        Vectorizer, Weighting,
    };
}
