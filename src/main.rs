//! Date picker CLI application.
//!
//! # Usage
//! ```ignore
//! datepick                    // Current month
//! datepick 3 2024             // March 2024
//! datepick 3 2024 -s 2024-03-15 --min 2024-03-01 --max 2024-03-31
//! datepick -t                 // Include navigation targets
//! ```

use datepick::args::{Args, build_request, use_color};
use datepick::formatter::print_grid;
use datepick::grid::build_grid;

fn main() {
    setup_logging();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("datepick: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let (request, today) = build_request(args)?;
    let model = build_grid(&request, &today).map_err(|e| e.to_string())?;
    print_grid(&model, use_color(args), args.targets);
    Ok(())
}

/// Log to stderr, filtered by RUST_LOG; stdout stays clean for the grid.
fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
