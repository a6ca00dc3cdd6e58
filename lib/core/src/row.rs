use serde::{Deserialize, Serialize};

/// Number of product slots a source row can carry
pub const PRODUCT_SLOTS: usize = 3;

/// One `(family, id)` product pair from a source row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSlot {
    pub family: String,
    pub id: String,
}

impl ProductSlot {
    #[inline]
    #[must_use]
    pub fn new(family: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            id: id.into(),
        }
    }
}

/// One record from the source table
///
/// Fields are optional because a file may lack a column entirely; rows loaded
/// from such a file carry no value there. The amount is kept as the raw source
/// string since it is only ever used stringified during fitting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductRow {
    pub profile: Option<String>,
    pub initial_investment_amount: Option<String>,
    pub initial_period: Option<String>,
    pub slots: [Option<ProductSlot>; PRODUCT_SLOTS],
}

impl ProductRow {
    /// Iterate over the populated product slots in slot order
    pub fn products(&self) -> impl Iterator<Item = &ProductSlot> {
        self.slots.iter().filter_map(|s| s.as_ref())
    }

    /// Count of populated product slots
    #[inline]
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
