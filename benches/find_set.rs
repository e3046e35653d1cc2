use criterion::{black_box, criterion_group, criterion_main, Criterion};
use set_game::cards::full_deck;
use set_game::{find_matching_set, SetCard, SetGame};

/// Worst case for the scan: a 16-card table with no set at all.
fn set_free_table() -> Vec<SetCard> {
    full_deck()
        .into_iter()
        .filter(|card| {
            let f = card.features();
            f.symbol_count() <= 2 && f.shape() <= 1 && f.shading() <= 1 && f.color() <= 1
        })
        .collect()
}

fn bench_find_matching_set(c: &mut Criterion) {
    let table = set_free_table();
    c.bench_function("find_matching_set/set_free_16", |b| {
        b.iter(|| find_matching_set(black_box(&table)))
    });

    let mut game = SetGame::with_seed(1);
    for _ in 0..3 {
        game.deal_three();
    }
    c.bench_function("find_matching_set/table_21", |b| {
        b.iter(|| black_box(&game).find_matching_set())
    });
}

criterion_group!(benches, bench_find_matching_set);
criterion_main!(benches);
