use crate::row::{ProductRow, ProductSlot, PRODUCT_SLOTS};
use crate::{Error, Result};
use ahash::AHashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Required source columns
pub const COL_PROFILE: &str = "profile";
pub const COL_AMOUNT: &str = "initial_investment_amount";
pub const COL_PERIOD: &str = "initial_period";

pub const REQUIRED_COLUMNS: [&str; 3] = [COL_PROFILE, COL_AMOUNT, COL_PERIOD];

/// An in-memory table of product rows, concatenated from one or more
/// semicolon-delimited files
///
/// The table is rebuilt wholesale on every processing cycle; rows are never
/// mutated after loading. Column names seen across all successfully loaded
/// files are tracked so missing required columns can be reported at fit time
/// rather than failing the whole batch at load time.
#[derive(Debug, Clone, Default)]
pub struct ProductTable {
    rows: Vec<ProductRow>,
    columns: AHashSet<String>,
}

impl ProductTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table directly from rows, with all recognized columns marked
    /// present. Intended for in-memory construction in tests and benchmarks.
    #[must_use]
    pub fn from_rows(rows: Vec<ProductRow>) -> Self {
        let mut columns: AHashSet<String> =
            REQUIRED_COLUMNS.iter().map(|c| (*c).to_string()).collect();
        for slot in 1..=PRODUCT_SLOTS {
            columns.insert(format!("product_{slot}_family"));
            columns.insert(format!("product_{slot}_id"));
        }
        Self { rows, columns }
    }

    /// Load and concatenate one or more delimited files
    ///
    /// A file that cannot be opened or parsed is skipped with a warning and
    /// excluded from the table; loading continues with the remaining files.
    /// Returns the table together with the number of skipped files. An empty
    /// result is not an error here - it surfaces at fit time.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<(Self, usize)> {
        let mut table = Self::new();
        let mut skipped = 0usize;

        for path in paths {
            let path = path.as_ref();
            match Self::load_file(path) {
                Ok((rows, headers)) => {
                    debug!(file = %path.display(), rows = rows.len(), "loaded file");
                    table.columns.extend(headers);
                    table.rows.extend(rows);
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "skipping unreadable file");
                    skipped += 1;
                }
            }
        }

        Ok((table, skipped))
    }

    /// Parse a single semicolon-delimited file into rows
    fn load_file(path: &Path) -> Result<(Vec<ProductRow>, Vec<String>)> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let find = |name: &str| headers.iter().position(|h| h == name);
        let profile_idx = find(COL_PROFILE);
        let amount_idx = find(COL_AMOUNT);
        let period_idx = find(COL_PERIOD);
        let slot_idx: Vec<(Option<usize>, Option<usize>)> = (1..=PRODUCT_SLOTS)
            .map(|slot| {
                (
                    find(&format!("product_{slot}_family")),
                    find(&format!("product_{slot}_id")),
                )
            })
            .collect();

        let cell = |record: &csv::StringRecord, idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| record.get(i))
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row = ProductRow {
                profile: cell(&record, profile_idx),
                initial_investment_amount: cell(&record, amount_idx),
                initial_period: cell(&record, period_idx),
                slots: Default::default(),
            };
            for (slot, (family_idx, id_idx)) in slot_idx.iter().enumerate() {
                // A slot counts only when both family and id are present
                if let (Some(family), Some(id)) = (cell(&record, *family_idx), cell(&record, *id_idx)) {
                    row.slots[slot] = Some(ProductSlot::new(family, id));
                }
            }
            rows.push(row);
        }

        Ok((rows, headers))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    /// Total product-slot capacity across all rows
    #[inline]
    #[must_use]
    pub fn slot_capacity(&self) -> usize {
        self.rows.len() * PRODUCT_SLOTS
    }

    /// Verify that every required column was seen in at least one loaded file
    pub fn check_required_columns(&self) -> Result<()> {
        for column in REQUIRED_COLUMNS {
            if !self.has_column(column) {
                return Err(Error::MissingColumn(column.to_string()));
            }
        }
        Ok(())
    }
}
