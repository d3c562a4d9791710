use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use snake_common::canvas::Canvas;
use snake_common::games::SessionRng;
use snake_common::games::snake::{
    Apple, Cell, Grid, InputEvent, Key, Palette, RelocationPolicy, SnakeGameState, SnakeSettings,
    TickOutcome,
};

fn bench_thousand_ticks() {
    let settings = SnakeSettings {
        relocation: RelocationPolicy::AvoidSnake,
        ..SnakeSettings::default()
    };
    let mut game = SnakeGameState::new(settings, SessionRng::from_random());
    let mut canvas = Canvas::new(Palette::default().background);
    game.start(&mut canvas);

    let keys = [Key::Up, Key::Right, Key::Down, Key::Left];
    for i in 0..1000 {
        let events = if i % 7 == 0 {
            vec![InputEvent::KeyPressed(keys[(i / 7) % keys.len()])]
        } else {
            Vec::new()
        };
        if game.tick(events, &mut canvas) != TickOutcome::Continue {
            break;
        }
    }
    black_box(game.snake().length);
}

fn bench_placement_on_crowded_field() {
    let grid = Grid::default();
    let free = Cell::new(grid.width - grid.cell_size, grid.height - grid.cell_size);
    let occupied: Vec<Cell> = grid.cells().filter(|cell| *cell != free).collect();
    let mut rng = SessionRng::from_random();
    let mut apple = Apple::new(&[], &grid, &Palette::default(), None, &mut rng);

    black_box(apple.randomize_position(&occupied, &grid, &mut rng));
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake");

    group
        .sample_size(50)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("1000_ticks", |b| {
        b.iter(bench_thousand_ticks)
    });

    group.bench_function("placement_one_free_cell", |b| {
        b.iter(bench_placement_on_crowded_field)
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
