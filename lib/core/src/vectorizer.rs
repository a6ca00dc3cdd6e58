//! Bag-of-words vectorizer over product rows
//!
//! Fits a vocabulary over the per-row input text and produces one vector per
//! row in row order. Queries are embedded into the already-fitted space with
//! [`VectorSpace::transform`]; the vocabulary is never re-fit on the query
//! path, so unseen query tokens contribute zero weight.

use crate::table::ProductTable;
use crate::vector::Vector;
use crate::{Error, Result};
use ahash::AHashMap;

/// Term weighting applied to row and query vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weighting {
    /// Raw term counts
    #[default]
    TermFrequency,
    /// Smoothed IDF reweighting with L2 row normalization
    TfIdf,
}

/// Tokenize text for indexing
///
/// Lowercase, split on whitespace and punctuation, keep alphanumeric tokens of
/// at least two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .map(|s| s.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|s| !s.is_empty() && s.len() > 1)
        .collect()
}

/// A fitted vocabulary plus one vector per row, in row order
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: AHashMap<String, usize>,
    vectors: Vec<Vector>,
    idf: Vec<f32>,
    weighting: Weighting,
}

impl VectorSpace {
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.vocabulary.len()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }

    #[inline]
    #[must_use]
    pub fn weighting(&self) -> Weighting {
        self.weighting
    }

    /// Embed arbitrary text into the fitted space
    ///
    /// Out-of-vocabulary tokens are dropped.
    pub fn transform(&self, text: &str) -> Vector {
        let mut components = vec![0.0f32; self.dim()];
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                components[idx] += 1.0;
            }
        }
        self.finish_vector(components)
    }

    fn finish_vector(&self, mut components: Vec<f32>) -> Vector {
        if self.weighting == Weighting::TfIdf {
            for (value, idf) in components.iter_mut().zip(self.idf.iter()) {
                *value *= idf;
            }
            let mut vector = Vector::new(components);
            vector.normalize();
            return vector;
        }
        Vector::new(components)
    }
}

/// Fits a [`VectorSpace`] over a product table
#[derive(Debug, Clone, Copy, Default)]
pub struct Vectorizer {
    weighting: Weighting,
}

impl Vectorizer {
    #[inline]
    #[must_use]
    pub fn new(weighting: Weighting) -> Self {
        Self { weighting }
    }

    /// Fit a vocabulary and per-row vectors over the table
    ///
    /// Each row's input text concatenates its profile, the entire
    /// `initial_investment_amount` column rendered as one string, and its
    /// period. The column-wide amount mirrors the source system's behavior
    /// and is kept deliberately; see DESIGN.md.
    ///
    /// Fails when a required column was never seen or the table has no rows.
    pub fn fit(&self, table: &ProductTable) -> Result<VectorSpace> {
        table.check_required_columns()?;
        if table.is_empty() {
            return Err(Error::EmptyTable);
        }

        let documents = Self::row_documents(table);

        // Vocabulary in first-seen token order
        let mut vocabulary: AHashMap<String, usize> = AHashMap::new();
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();
        for tokens in &tokenized {
            for token in tokens {
                if !vocabulary.contains_key(token) {
                    vocabulary.insert(token.clone(), vocabulary.len());
                }
            }
        }

        let dim = vocabulary.len();
        let idf = match self.weighting {
            Weighting::TermFrequency => vec![1.0; dim],
            Weighting::TfIdf => Self::smoothed_idf(&vocabulary, &tokenized, dim),
        };

        let mut space = VectorSpace {
            vocabulary,
            vectors: Vec::with_capacity(tokenized.len()),
            idf,
            weighting: self.weighting,
        };

        let mut vectors = Vec::with_capacity(tokenized.len());
        for tokens in &tokenized {
            let mut components = vec![0.0f32; dim];
            for token in tokens {
                components[space.vocabulary[token]] += 1.0;
            }
            vectors.push(space.finish_vector(components));
        }
        space.vectors = vectors;

        Ok(space)
    }

    /// Build the per-row input texts
    fn row_documents(table: &ProductTable) -> Vec<String> {
        // The whole amount column as one string, shared by every row
        let amount_column: String = table
            .rows()
            .iter()
            .filter_map(|r| r.initial_investment_amount.as_deref())
            .collect::<Vec<_>>()
            .join(" ");

        table
            .rows()
            .iter()
            .map(|row| {
                format!(
                    "{} {} {}",
                    row.profile.as_deref().unwrap_or(""),
                    amount_column,
                    row.initial_period.as_deref().unwrap_or(""),
                )
            })
            .collect()
    }

    /// Smoothed IDF: ln((1 + n) / (1 + df)) + 1
    fn smoothed_idf(
        vocabulary: &AHashMap<String, usize>,
        tokenized: &[Vec<String>],
        dim: usize,
    ) -> Vec<f32> {
        let mut df = vec![0u32; dim];
        for tokens in tokenized {
            let mut seen = vec![false; dim];
            for token in tokens {
                let idx = vocabulary[token];
                if !seen[idx] {
                    seen[idx] = true;
                    df[idx] += 1;
                }
            }
        }

        let n = tokenized.len() as f32;
        df.into_iter()
            .map(|d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::{ProductRow, ProductSlot};

    fn row(profile: &str, amount: &str, period: &str) -> ProductRow {
        ProductRow {
            profile: Some(profile.to_string()),
            initial_investment_amount: Some(amount.to_string()),
            initial_period: Some(period.to_string()),
            slots: [Some(ProductSlot::new("Funds", "FU-01")), None, None],
        }
    }

    fn sample_table() -> ProductTable {
        ProductTable::from_rows(vec![
            row("Conservative", "1000", "Menos que 6 meses"),
            row("Moderate", "5000", "6 meses a 1 ano"),
            row("Dynamic", "250000", "Mais que 1 ano"),
        ])
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("Conservative, 1000; Menos que 6 meses");
        assert_eq!(tokens, vec!["conservative", "1000", "menos", "que", "meses"]);
    }

    #[test]
    fn test_fit_produces_one_vector_per_row() {
        let table = sample_table();
        let space = Vectorizer::default().fit(&table).unwrap();
        assert_eq!(space.len(), 3);
        assert!(space.dim() > 0);
    }

    #[test]
    fn test_empty_table_fails() {
        let table = ProductTable::from_rows(vec![]);
        assert!(matches!(
            Vectorizer::default().fit(&table),
            Err(Error::EmptyTable)
        ));
    }

    #[test]
    fn test_transform_matches_row_text() {
        let table = sample_table();
        let space = Vectorizer::default().fit(&table).unwrap();

        // Re-derive row 1's exact input text: profile + whole amount column + period
        let query = "Moderate 1000 5000 250000 6 meses a 1 ano";
        let embedded = space.transform(query);
        let sim = embedded.cosine_similarity(&space.vectors()[1]);
        assert!((sim - 1.0).abs() < 1e-5, "expected 1.0, got {sim}");
    }

    #[test]
    fn test_unseen_tokens_contribute_zero() {
        let table = sample_table();
        let space = Vectorizer::default().fit(&table).unwrap();
        let embedded = space.transform("cryptocurrency blockchain");
        assert_eq!(embedded.norm(), 0.0);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let table = sample_table();
        let space = Vectorizer::default().fit(&table).unwrap();
        let a = space.transform("Conservative 1000");
        let b = space.transform("Conservative 1000");
        assert_eq!(a, b);
    }

    #[test]
    fn test_tfidf_vectors_are_unit_norm() {
        let table = sample_table();
        let space = Vectorizer::new(Weighting::TfIdf).fit(&table).unwrap();
        for vector in space.vectors() {
            assert!((vector.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_amount_column_is_shared_across_rows() {
        let table = sample_table();
        let space = Vectorizer::default().fit(&table).unwrap();

        // Every row text embeds the whole amount column, so a pure-amount
        // query is equally similar to rows whose remaining tokens overlap
        // it equally.
        let embedded = space.transform("1000 5000 250000");
        let sims: Vec<f32> = space
            .vectors()
            .iter()
            .map(|v| embedded.cosine_similarity(v))
            .collect();
        assert!(sims.iter().all(|s| *s > 0.0));
    }
}
