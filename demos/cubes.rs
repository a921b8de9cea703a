//! Print one of the preset diagrams as SVG.
//!
//! cargo run --example cubes --features tracing -- nested 1280 720

use isocube::{DiagramConfig, Viewport};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next().as_deref() {
        Some("nested") => DiagramConfig::nested_cubes(),
        Some("single") | None => DiagramConfig::single_cube(),
        Some(other) => miette::bail!("unknown preset {other:?} (expected `single` or `nested`)"),
    };

    let config = match (args.next(), args.next()) {
        (Some(w), Some(h)) => {
            let width: f64 = w.parse().map_err(|e| miette::miette!("bad width {w:?}: {e}"))?;
            let height: f64 = h.parse().map_err(|e| miette::miette!("bad height {h:?}: {e}"))?;
            config.with_viewport(Viewport::new(width, height))
        }
        _ => config,
    };

    let svg = isocube::render(&config)?;
    print!("{svg}");
    Ok(())
}
