use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figrid_core::{place_axes_on_grid, Figure, GridPlacement};

fn bench_place(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_axes_on_grid");
    for &(rows, cols) in &[(1usize, 1usize), (4, 4), (20, 20)] {
        group.bench_function(format!("grid_{rows}x{cols}"), |b| {
            let placement = GridPlacement::new()
                .dim(rows, cols)
                .xspan(0.1, 0.9)
                .yspan(0.1, 0.9)
                .sharex(true)
                .sharey(true);
            b.iter(|| {
                let mut fig = Figure::new();
                let placed = place_axes_on_grid(&mut fig, &placement).expect("place");
                black_box(placed);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_place);
criterion_main!(benches);
