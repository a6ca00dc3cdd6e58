// Performance benchmarks for fitting and recommendation
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use investx_core::{ProductRow, ProductSlot, ProductTable, Vectorizer, Weighting};
use investx_engine::{recommend, Period, ProductCount, Query, RiskProfile};
use rand::prelude::*;

const PROFILES: [&str; 4] = ["Ultra-Conservative", "Conservative", "Moderate", "Dynamic"];
const PERIODS: [&str; 3] = ["Menos que 6 meses", "6 meses a 1 ano", "Mais que 1 ano"];
const FAMILIES: [&str; 5] = ["Fixed Income", "Funds", "Equity", "Pension", "Treasury"];

fn generate_row(rng: &mut impl Rng, id: usize) -> ProductRow {
    let family = FAMILIES[rng.random_range(0..FAMILIES.len())];
    ProductRow {
        profile: Some(PROFILES[rng.random_range(0..PROFILES.len())].to_string()),
        initial_investment_amount: Some(format!("{}", rng.random_range(1..600) * 500)),
        initial_period: Some(PERIODS[rng.random_range(0..PERIODS.len())].to_string()),
        slots: [
            Some(ProductSlot::new(family, format!("PR-{id:05}"))),
            None,
            None,
        ],
    }
}

fn generate_table(size: usize) -> ProductTable {
    let mut rng = rand::rng();
    ProductTable::from_rows((0..size).map(|i| generate_row(&mut rng, i)).collect())
}

fn benchmark_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for size in [100, 1000, 10000].iter() {
        let table = generate_table(*size);
        group.bench_with_input(BenchmarkId::new("term_frequency", size), size, |b, _| {
            b.iter(|| Vectorizer::default().fit(black_box(&table)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("tfidf", size), size, |b, _| {
            b.iter(|| {
                Vectorizer::new(Weighting::TfIdf)
                    .fit(black_box(&table))
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [100, 1000, 10000].iter() {
        let table = generate_table(*size);
        let space = Vectorizer::default().fit(&table).unwrap();
        let query = Query::new(
            RiskProfile::Moderate,
            5000.0,
            ProductCount::new(5).unwrap(),
            Period::SixMonthsToOneYear,
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::new("top5", size), size, |b, _| {
            b.iter(|| recommend(black_box(&query), &space, &table).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_fit, benchmark_recommend);
criterion_main!(benches);
