use std::io::{self, Write};
use std::process;
use std::time::Instant;

use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use backtrack_maze::config::{Config, USAGE};
use backtrack_maze::renderer;
use backtrack_maze::{Generator, RecursiveBacktracker};

fn new_generator(config: &Config) -> Result<Box<dyn Generator>, backtrack_maze::GridError> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let generator = RecursiveBacktracker::new(config.cols, config.rows, config.start(), rng)?;
    Ok(Box::new(generator))
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut maze_generator = new_generator(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let interval = match config.frame_interval() {
        Some(interval) => interval,
        None => {
            maze_generator.generate_maze();
            let grid = maze_generator.grid();
            let current = maze_generator.current();
            out.write_all(renderer::render(grid, current, config.color).as_bytes())?;
            return Ok(());
        }
    };

    let started = Instant::now();
    loop {
        let last_frame = Instant::now();

        // render fully before stepping again
        let frame = renderer::frame(maze_generator.grid(), maze_generator.current(), config.color);
        out.write_all(frame.as_bytes())?;
        out.flush()?;

        if maze_generator.is_done() {
            break;
        }
        maze_generator.step_generation();

        let elapsed = last_frame.elapsed();
        if elapsed < interval {
            std::thread::sleep(interval - elapsed);
        }
    }

    info!("animation took {:?}", started.elapsed());
    Ok(())
}

fn main() {
    env_logger::init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}\n{}", e, USAGE);
            process::exit(2);
        }
    };
    info!(
        "generating {}x{} maze at {} fps, seed {:?}",
        config.cols, config.rows, config.fps, config.seed
    );

    if let Err(e) = run(&config) {
        error!("{}", e);
        process::exit(1);
    }
}
