use criterion::{Criterion, criterion_group, criterion_main};
use fadetoe_core::{GameEngine, GameMode, HeuristicStrategy, Mark, MoveStrategy};
use std::hint::black_box;

/// Boards reached by replaying a few fixed openings.
fn mid_game_boards() -> Vec<GameEngine> {
    [
        &[0][..],
        &[0, 4, 8],
        &[4, 0, 8, 2, 6],
        &[0, 4, 1, 2, 6, 3, 5],
        &[1, 3, 5, 7, 0, 8, 2, 6],
    ]
    .into_iter()
    .map(|cells| {
        let mut engine = GameEngine::new(GameMode::HumanVsComputer);
        for &cell in cells {
            engine.apply_move(cell);
        }
        engine
    })
    .collect()
}

fn bench_choose_move(c: &mut Criterion) {
    let boards = mid_game_boards();
    let mut strategy = HeuristicStrategy::seeded(0x5eed);

    c.bench_function("heuristic_choose_move", |b| {
        b.iter(|| {
            for engine in &boards {
                let turn = engine.turn();
                black_box(strategy.choose_move(black_box(engine.board()), turn, turn.opponent()));
            }
        })
    });
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("heuristic_self_play_40", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(GameMode::HumanVsHuman);
            let mut strategy = HeuristicStrategy::seeded(1);
            for _ in 0..40 {
                let turn = engine.turn();
                let Some(cell) = strategy.choose_move(engine.board(), turn, turn.opponent()) else {
                    break;
                };
                engine.apply_move(cell);
                if engine.evaluate().is_finished() {
                    break;
                }
            }
            black_box(engine.board().count(Mark::X))
        })
    });
}

criterion_group!(benches, bench_choose_move, bench_playout);
criterion_main!(benches);
