use std::io;
use std::io::Write;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal;
use crossterm::terminal::ClearType;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use termlife::Coord;
use termlife::engine::Engine;
use termlife::grid::Grid;
use termlife::render::Frame;
use termlife::stats::PhaseTimer;

/// Conway's Game of Life on a bounded board, rendered to the terminal.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = 150)]
    width: Coord,

    /// Board height in cells
    #[arg(long, default_value_t = 40)]
    height: Coord,

    /// Probability that a cell starts alive
    #[arg(long, default_value_t = 0.2)]
    probability: f64,

    /// Fixed RNG seed. Omit for a different board every run
    #[arg(long)]
    seed: Option<u64>,

    /// Print only the statistics line, skip board rendering
    #[arg(long, env = "MINIMAL")]
    minimal: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let grid = Grid::random(args.width, args.height, args.probability, &mut rng)
        .context("Failed to build the board")?;

    info!(
        width = args.width,
        height = args.height,
        probability = args.probability,
        "board seeded"
    );

    run(Engine::new(grid), args.minimal)
}

/// The run loop: tick, render, print, forever. Rendering always happens
/// strictly between a tick's commit and the next tick's decide pass.
fn run(mut engine: Engine, minimal: bool) -> anyhow::Result<()> {
    let mut frame = Frame::new(engine.grid());
    let mut stdout = io::stdout();

    // Show the starting board before the first generation.
    if !minimal {
        stdout.write_all(frame.render(engine.grid()).as_bytes())?;
    }

    let mut tick_timer = PhaseTimer::new();
    let mut render_timer = PhaseTimer::new();

    loop {
        let start = Instant::now();
        engine.tick();
        tick_timer.record(start.elapsed());

        let start = Instant::now();
        let rendered = frame.render(engine.grid());
        render_timer.record(start.elapsed());

        if !minimal {
            execute!(stdout, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;
        }

        writeln!(
            stdout,
            "#{} - World Tick (L: {:.3}; A: {:.3}) - Rendering (L: {:.3}; A: {:.3})",
            engine.tick_count(),
            tick_timer.lowest_ms(),
            tick_timer.average_ms(),
            render_timer.lowest_ms(),
            render_timer.average_ms(),
        )?;

        if !minimal {
            stdout.write_all(rendered.as_bytes())?;
        }
    }
}
