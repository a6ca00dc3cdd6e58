//! Top-k cosine ranking with proportional allocation
//!
//! This is a pure function of the query, the fitted vector space, and the
//! table; it holds no state across calls. The selection and allocation rules
//! reproduce the source system exactly, including its cyclic reuse of
//! similarity weights when product pairs outnumber selected rows (see
//! DESIGN.md).

use crate::query::Query;
use crate::report::{self, Recommendation, RecommendedProduct};
use investx_core::{Error, ProductTable, Result, VectorSpace};
use std::cmp::Ordering;
use tracing::debug;

/// Recommend up to `query.count` products from the fitted space
///
/// Selection: stable ascending sort of the per-row cosine similarities, keep
/// the trailing `count` indices (so selected rows come out in increasing
/// similarity order and ties resolve by original row order). Product pairs
/// are emitted from the selected rows in slot order, truncated to `count`,
/// and the amount is allocated proportionally to the selected similarities.
pub fn recommend(
    query: &Query,
    space: &VectorSpace,
    table: &ProductTable,
) -> Result<Recommendation> {
    debug_assert_eq!(space.len(), table.len());

    let requested = query.count.get();
    let available = table.slot_capacity();
    if requested > available {
        return Err(Error::TooManyProducts {
            requested,
            available,
        });
    }

    let query_vector = space.transform(&query.text());
    let similarities: Vec<f32> = space
        .vectors()
        .iter()
        .map(|v| query_vector.cosine_similarity(v))
        .collect();

    // Stable ascending argsort; keep the trailing `requested` indices
    let mut order: Vec<usize> = (0..similarities.len()).collect();
    order.sort_by(|&a, &b| {
        similarities[a]
            .partial_cmp(&similarities[b])
            .unwrap_or(Ordering::Equal)
    });
    let start = order.len().saturating_sub(requested);
    let selected = &order[start..];

    let selected_sims: Vec<f32> = selected.iter().map(|&i| similarities[i]).collect();
    let sim_sum: f32 = selected_sims.iter().sum();

    // Emit (family, id) pairs in slot order within each selected row
    let mut pairs = Vec::new();
    for &row_idx in selected {
        for slot in table.rows()[row_idx].products() {
            pairs.push(slot.clone());
        }
    }
    pairs.truncate(requested);

    if pairs.is_empty() || sim_sum <= 0.0 {
        debug!(
            sim_sum,
            pairs = pairs.len(),
            "degenerate query: returning empty recommendation"
        );
        let summary = report::render(query, &[]);
        return Ok(Recommendation {
            products: Vec::new(),
            summary,
        });
    }

    let products: Vec<RecommendedProduct> = pairs
        .into_iter()
        .enumerate()
        .map(|(i, slot)| {
            // Weights are reused cyclically when pairs outnumber selected rows
            let share = f64::from(selected_sims[i % selected_sims.len()]) / f64::from(sim_sum);
            RecommendedProduct {
                family: slot.family,
                id: slot.id,
                value: share * query.amount,
                percentage: share * 100.0,
            }
        })
        .collect();

    debug!(
        selected = selected.len(),
        products = products.len(),
        "recommendation computed"
    );

    let summary = report::render(query, &products);
    Ok(Recommendation { products, summary })
}
