//! # investX Core
//!
//! Core library for the investX product recommender.
//!
//! This crate provides the data model and the text-similarity index:
//!
//! - [`ProductRow`] / [`ProductTable`] - tabular product data loaded from
//!   semicolon-delimited files
//! - [`Vector`] - dense vector with cosine similarity
//! - [`Vectorizer`] / [`VectorSpace`] - bag-of-words fitting and query
//!   embedding
//!
//! ## Example
//!
//! ```rust
//! use investx_core::{ProductRow, ProductSlot, ProductTable, Vectorizer};
//!
//! let table = ProductTable::from_rows(vec![ProductRow {
//!     profile: Some("Moderate".to_string()),
//!     initial_investment_amount: Some("5000".to_string()),
//!     initial_period: Some("6 meses a 1 ano".to_string()),
//!     slots: [Some(ProductSlot::new("Funds", "FU-01")), None, None],
//! }]);
//!
//! let space = Vectorizer::default().fit(&table).unwrap();
//! let query = space.transform("Moderate 5000 6 meses a 1 ano");
//! let sim = query.cosine_similarity(&space.vectors()[0]);
//! assert!(sim > 0.99);
//! ```

pub mod error;
pub mod row;
pub mod table;
pub mod vector;
pub mod vectorizer;

pub use error::{Error, Result};
pub use row::{ProductRow, ProductSlot, PRODUCT_SLOTS};
pub use table::{ProductTable, COL_AMOUNT, COL_PERIOD, COL_PROFILE, REQUIRED_COLUMNS};
pub use vector::Vector;
pub use vectorizer::{tokenize, VectorSpace, Vectorizer, Weighting};
