use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_chase::core::{Board, GameState};
use tui_chase::term::GameView;
use tui_chase::types::Command;

fn fresh_game() -> GameState {
    GameState::new(Board::new(80, 24).unwrap(), 12345).unwrap()
}

fn bench_turn(c: &mut Criterion) {
    let start = fresh_game();

    c.bench_function("full_turn_wait", |b| {
        b.iter(|| {
            let mut state = start.clone();
            black_box(state.apply_command(black_box(Command::Wait)));
        })
    });
}

fn bench_collisions(c: &mut Criterion) {
    let mut state = fresh_game();
    state.advance_drones();

    c.bench_function("resolve_collisions_25", |b| {
        b.iter(|| {
            let mut s = state.clone();
            s.resolve_collisions();
            black_box(s.alive_count());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = fresh_game().snapshot();
    let view = GameView::default();

    c.bench_function("render_80x24", |b| {
        b.iter(|| black_box(view.render(black_box(&snap))))
    });
}

criterion_group!(benches, bench_turn, bench_collisions, bench_render);
criterion_main!(benches);
