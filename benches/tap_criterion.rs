use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tap_chess::game_state::chess_types::PieceKind;
use tap_chess::moves::reach::can_reach;
use tap_chess::session::GameSession;
use tap_chess::utils::random_taps::RandomTapper;

const TAP_COUNTS: &[u32] = &[100, 1_000, 10_000];
const SEED: u64 = 0x7A9_C4E55;

fn bench_random_taps(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_taps");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for &taps in TAP_COUNTS {
        // Correctness guard before benchmarking.
        let mut warmup = GameSession::new();
        let stats = RandomTapper::new(SEED).drive(&mut warmup, taps);
        assert_eq!(stats.taps, taps);

        group.throughput(Throughput::Elements(taps as u64));
        group.bench_with_input(BenchmarkId::from_parameter(taps), &taps, |b, &taps| {
            b.iter(|| {
                let mut session = GameSession::new();
                let stats = RandomTapper::new(SEED).drive(&mut session, black_box(taps));
                black_box(stats.moves)
            });
        });
    }

    group.finish();
}

fn bench_can_reach(c: &mut Criterion) {
    let kinds = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::King,
        PieceKind::Queen,
    ];

    c.bench_function("can_reach_all_pairs", |b| {
        b.iter(|| {
            let mut reachable = 0u32;
            for kind in kinds {
                for from in 0..64usize {
                    for to in 0..64usize {
                        if can_reach(
                            black_box(kind),
                            (from / 8, from % 8),
                            (to / 8, to % 8),
                        ) {
                            reachable += 1;
                        }
                    }
                }
            }
            black_box(reachable)
        });
    });
}

criterion_group!(tap_benches, bench_random_taps, bench_can_reach);
criterion_main!(tap_benches);
