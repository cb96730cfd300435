use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_starfield::core::{
    draw, populate, Grid, SceneConfig, Scheduler, SimpleRng, TextFrame,
};
use tui_starfield::types::InputSnapshot;

fn rocket() -> TextFrame {
    TextFrame::new("rocket", "  .\n .'.\n |o|\n.'o'.\n|.-.|\n'   '\n ( )\n  )\n ( )")
}

fn bench_starfield_tick(c: &mut Criterion) {
    let frames: Arc<[TextFrame]> = vec![rocket()].into();
    let mut scheduler = Scheduler::new();
    let scene = SceneConfig {
        stars: 1000,
        ..SceneConfig::default()
    };
    populate(&mut scheduler, (50, 200), frames, &scene, &mut SimpleRng::new(12345));
    let mut grid = Grid::new(50, 200);

    c.bench_function("starfield_tick_1000_stars", |b| {
        b.iter(|| {
            scheduler.tick(&mut grid, black_box(InputSnapshot::default()));
        })
    });
}

fn bench_fire_spawn(c: &mut Criterion) {
    let frames: Arc<[TextFrame]> = vec![rocket()].into();
    let scene = SceneConfig {
        stars: 0,
        opening_shot: false,
        ..SceneConfig::default()
    };
    let mut scheduler = Scheduler::new();
    populate(&mut scheduler, (200, 80), frames, &scene, &mut SimpleRng::new(1));
    let mut grid = Grid::new(200, 80);

    c.bench_function("tick_with_fire_request", |b| {
        b.iter(|| {
            scheduler.tick(&mut grid, black_box(InputSnapshot::new(0, 0, true)));
        })
    });
}

fn bench_frame_draw_erase(c: &mut Criterion) {
    let frame = rocket();
    let mut grid = Grid::new(50, 200);

    c.bench_function("frame_draw_erase", |b| {
        b.iter(|| {
            draw(&mut grid, black_box(20), black_box(100), &frame, false);
            draw(&mut grid, black_box(20), black_box(100), &frame, true);
        })
    });
}

criterion_group!(
    benches,
    bench_starfield_tick,
    bench_fire_spawn,
    bench_frame_draw_erase
);
criterion_main!(benches);
