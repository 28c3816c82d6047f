use std::{hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};

use scrimmage_scheduler::{
    game_list::GameList, player::PlayerSpec, round_robin::round_robin, time::TimeControlProfile,
};

fn large_round_robin(c: &mut Criterion) {
    let players: Vec<_> = (0..64)
        .map(|i| {
            PlayerSpec::new(&format!("carol.bot{}", i % 48)).with_multiplier(f64::from(i % 4 + 1))
        })
        .collect();
    let profile = TimeControlProfile::new(0.5, 60.0);

    c.bench_function("round_robin_64_players_10_rounds", |b| {
        b.iter(|| round_robin(black_box(&players), profile, 10));
    });

    let game_list = GameList::new("carol", round_robin(&players, profile, 10));
    c.bench_function("game_list_to_string", |b| {
        b.iter(|| black_box(&game_list).to_string());
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = large_round_robin
}

criterion_main!(benches);
