//! Step throughput: serial vs rayon across board sizes

use std::time::Instant;
use rand::SeedableRng;
use rand::rngs::StdRng;
use life_arcade::Grid;

fn random_grid(height: usize, width: usize) -> Grid {
    let mut grid = Grid::new(height, width);
    grid.randomize_with(&mut StdRng::seed_from_u64(0xC0FFEE), 0.3);
    grid
}

/// Average milliseconds per generation
fn benchmark(mut grid: Grid, iterations: u32, step: fn(&Grid) -> Grid) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("Conway's Game of Life - Step Benchmark");
    println!("========================================\n");

    let sizes = [(60, 80), (200, 200), (500, 500), (1000, 1000)];

    println!("{:>12} {:>12} {:>12} {:>10}", "Board", "Serial", "Parallel", "Speedup");
    println!("{}", "-".repeat(50));

    for (h, w) in sizes {
        let cells = h * w;
        let iterations = if cells > 250_000 { 10 } else { 100 };
        let grid = random_grid(h, w);

        let serial = benchmark(grid.clone(), iterations, Grid::step);
        let parallel = benchmark(grid, iterations, Grid::step_parallel);

        println!(
            "{:>12} {:>10.3}ms {:>10.3}ms {:>9.1}x",
            format!("{h}x{w}"),
            serial,
            parallel,
            serial / parallel
        );
    }

    println!("\nDefault 60x80 board stays on the serial path.");
}
