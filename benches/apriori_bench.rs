use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use apriori_rules::{generate_rules, mine, TransactionSet};

/// Generate synthetic basket data
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: How dense the data is (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> TransactionSet {
    let mut rng = rand::thread_rng();
    let labels: Vec<String> = (0..num_items).map(|idx| format!("item{idx}")).collect();

    let rows: Vec<Vec<bool>> = (0..num_transactions)
        .map(|_| {
            let mut row = vec![false; num_items];
            let random_factor: f64 = rng.gen();
            let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;

            for _ in 0..num_items_in_tx.min(num_items) {
                if rng.gen::<f64>() < density {
                    row[rng.gen_range(0..num_items)] = true;
                }
            }
            row
        })
        .collect();

    TransactionSet::from_presence_rows(&labels, rows).unwrap()
}

fn bench_apriori_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 30, 8),
        ("large_1000tx", 1000, 40, 10),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| mine(black_box(tx), black_box(0.1)));
        });
    }

    group.finish();
}

fn bench_apriori_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("apriori_min_support");

    let transactions = generate_transactions(500, 30, 8, 0.7);

    for &min_sup in &[0.05, 0.1, 0.2, 0.3, 0.5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", min_sup)),
            &min_sup,
            |b, &sup| {
                b.iter(|| mine(black_box(&transactions), black_box(sup)));
            },
        );
    }

    group.finish();
}

fn bench_rule_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_generation");

    let transactions = generate_transactions(500, 20, 10, 0.9);
    let frequent = mine(&transactions, 0.05).unwrap();

    for &min_conf in &[0.0, 0.5, 0.9] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.1}", min_conf)),
            &min_conf,
            |b, &conf| {
                b.iter(|| generate_rules(black_box(&frequent), black_box(conf)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_apriori_scaling,
    bench_apriori_min_support,
    bench_rule_generation
);
criterion_main!(benches);
