use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::GameState;
use tui_snake::term::{FrameBuffer, GameView, Viewport};

fn bench_step(c: &mut Criterion) {
    c.bench_function("game_step", |b| {
        let mut state = GameState::new(12345);
        b.iter(|| {
            if state.game_over() {
                state.reset();
            }
            state.step();
        })
    });
}

fn bench_spawn_food(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("spawn_food", |b| {
        b.iter(|| {
            state.spawn_food();
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let state = GameState::new(12345);
    let view = GameView;
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_frame_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&state), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(benches, bench_step, bench_spawn_food, bench_render_frame);
criterion_main!(benches);
