use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tablic::cards::Card;
use tablic::table::{sums_to, Table};

fn card(id: i32) -> Card {
    Card::new(id).unwrap()
}

fn bench_sums_to(c: &mut Criterion) {
    // Four Aces and a 9: the widest product a single deck allows.
    let aces: Vec<Card> = [0, 13, 26, 39, 8].iter().map(|&i| card(i)).collect();
    let plain: Vec<Card> = [1, 2, 3, 4].iter().map(|&i| card(i)).collect();

    c.bench_function("sums_to_four_aces", |b| {
        b.iter(|| sums_to(black_box(&aces), black_box(&[13u32][..])))
    });
    c.bench_function("sums_to_plain", |b| {
        b.iter(|| sums_to(black_box(&plain), black_box(&[14u32][..])))
    });
}

fn bench_take(c: &mut Criterion) {
    let mut table = Table::new();
    for id in 1..9 {
        table.place(card(id)).unwrap();
    }
    let taken = vec![vec![card(1), card(6)], vec![card(2), card(5)], vec![card(3), card(4)]];

    c.bench_function("take_three_groups", |b| {
        b.iter(|| {
            let mut scratch = table.clone();
            scratch.take(black_box(card(21)), black_box(&taken)).unwrap()
        })
    });
}

criterion_group!(benches, bench_sums_to, bench_take);
criterion_main!(benches);
