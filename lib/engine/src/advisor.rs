//! Rebuild-then-query session state
//!
//! One processing cycle loads the files, fits the vector space, and swaps the
//! fitted state in wholesale; nothing is merged incrementally. The new state
//! is built before the write lock is taken, so a failed cycle leaves the
//! previous recommendation state intact and a query never observes a space
//! mid-rebuild.

use crate::query::Query;
use crate::recommend::recommend;
use crate::report::Recommendation;
use investx_core::{Error, ProductTable, Result, VectorSpace, Vectorizer, Weighting};
use parking_lot::RwLock;
use std::path::Path;
use tracing::info;

struct FittedState {
    table: ProductTable,
    space: VectorSpace,
}

/// Owns the fitted vector space across processing cycles
#[derive(Default)]
pub struct Advisor {
    state: RwLock<Option<FittedState>>,
}

impl Advisor {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the given files and rebuild the vector space
    ///
    /// Returns the number of skipped files. On any error the previously
    /// fitted state (if any) is left untouched.
    pub fn process<P: AsRef<Path>>(&self, paths: &[P], weighting: Weighting) -> Result<usize> {
        let (table, skipped) = ProductTable::load(paths)?;
        let space = Vectorizer::new(weighting).fit(&table)?;
        info!(
            rows = table.len(),
            vocabulary = space.dim(),
            skipped,
            "vector space rebuilt"
        );

        *self.state.write() = Some(FittedState { table, space });
        Ok(skipped)
    }

    /// Run one recommendation against the current fitted state
    pub fn recommend(&self, query: &Query) -> Result<Recommendation> {
        let state = self.state.read();
        let state = state.as_ref().ok_or(Error::NotFitted)?;
        recommend(query, &state.space, &state.table)
    }

    /// Whether a processing cycle has completed successfully
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.state.read().is_some()
    }

    /// Number of rows in the current table, if fitted
    #[must_use]
    pub fn row_count(&self) -> Option<usize> {
        self.state.read().as_ref().map(|s| s.table.len())
    }
}
