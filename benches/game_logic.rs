use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pong::core::GameState;
use tui_pong::term::{FrameBuffer, GameView, Viewport};
use tui_pong::types::{Board, GameEvent};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(Board::default());

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            state.apply(black_box(GameEvent::Tick));
        })
    });
}

fn bench_paddle_move(c: &mut Criterion) {
    let mut state = GameState::new(Board::default());

    c.bench_function("paddle_move", |b| {
        b.iter(|| {
            state.apply(black_box(GameEvent::MoveLeftPaddleUp));
            state.apply(black_box(GameEvent::MoveLeftPaddleDown));
        })
    });
}

fn bench_render_view(c: &mut Criterion) {
    let snap = GameState::new(Board::default()).snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_view", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_tick, bench_paddle_move, bench_render_view);
criterion_main!(benches);
