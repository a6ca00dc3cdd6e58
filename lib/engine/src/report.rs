//! Recommendation output and text rendering

use crate::query::Query;
use serde::{Deserialize, Serialize};

/// One recommended product with its allocated share of the amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedProduct {
    pub family: String,
    pub id: String,
    /// Allocated value in currency units
    pub value: f64,
    /// Allocation share in percent, 0 to 100
    pub percentage: f64,
}

/// An ordered list of recommended products plus the rendered summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub products: Vec<RecommendedProduct>,
    pub summary: String,
}

impl Recommendation {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Format a currency value with comma thousands grouping and two decimals
#[must_use]
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (integer, decimals) = match formatted.split_once('.') {
        Some((i, d)) => (i, d),
        None => (formatted.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    let digits: Vec<char> = integer.chars().collect();
    for (pos, c) in digits.iter().enumerate() {
        if pos > 0 && (digits.len() - pos) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    format!("{grouped}.{decimals}")
}

/// Render the human-readable summary for a query and its products
///
/// An empty product list renders the header plus a low-confidence line.
#[must_use]
pub fn render(query: &Query, products: &[RecommendedProduct]) -> String {
    let mut text = format!(
        "Based on your profile '{}', investment amount of R${}, and period '{}', we recommend the following products:\n",
        query.profile,
        format_currency(query.amount),
        query.period,
    );

    if products.is_empty() {
        text.push_str("No sufficiently similar products were found for this query.\n");
        return text;
    }

    for (i, product) in products.iter().enumerate() {
        text.push_str(&format!(
            "- Product {}: {} (Identifier: {})\n  - Value: R${} (Distribution: {:.2}%)\n",
            i + 1,
            product.family,
            product.id,
            format_currency(product.value),
            product.percentage,
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{Period, ProductCount, RiskProfile};

    fn query() -> Query {
        Query::new(
            RiskProfile::Moderate,
            12_345.67,
            ProductCount::new(2).unwrap(),
            Period::SixMonthsToOneYear,
        )
        .unwrap()
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(999.5), "999.50");
        assert_eq!(format_currency(1_000.0), "1,000.00");
        assert_eq!(format_currency(12_345.678), "12,345.68");
        assert_eq!(format_currency(1_234_567.0), "1,234,567.00");
    }

    #[test]
    fn test_render_header_and_products() {
        let products = vec![RecommendedProduct {
            family: "Fixed Income".to_string(),
            id: "FI-01".to_string(),
            value: 12_345.67,
            percentage: 100.0,
        }];

        let text = render(&query(), &products);
        assert!(text.starts_with(
            "Based on your profile 'Moderate', investment amount of R$12,345.67, and period '6 meses a 1 ano'"
        ));
        assert!(text.contains("- Product 1: Fixed Income (Identifier: FI-01)"));
        assert!(text.contains("Value: R$12,345.67 (Distribution: 100.00%)"));
    }

    #[test]
    fn test_render_empty_is_low_confidence() {
        let text = render(&query(), &[]);
        assert!(text.contains("No sufficiently similar products"));
    }

    #[test]
    fn test_recommendation_serde_roundtrip() {
        let rec = Recommendation {
            products: vec![RecommendedProduct {
                family: "Funds".to_string(),
                id: "FU-11".to_string(),
                value: 5000.0,
                percentage: 100.0,
            }],
            summary: "summary".to_string(),
        };

        let json = serde_json::to_string(&rec).unwrap();
        let parsed: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, parsed);
    }
}
