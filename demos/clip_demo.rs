//! Sweepclip demo: clips two overlapping shapes with every operation and
//! prints the resulting contours.
//!
//! Usage:
//! ```text
//! cargo run --example clip_demo
//! RUST_LOG=sweepclip=trace cargo run --example clip_demo   # per-scanbeam detail
//! ```

use sweepclip::operations::query::Area;
use sweepclip::{Clip, ClipOp, ClipOptions, Polygon};

fn main() -> sweepclip::Result<()> {
    // Default: WARN for everything, INFO for sweepclip.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sweepclip=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let square = Polygon::from_xy(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    let diamond = Polygon::from_xy(&[(1.0, -0.5), (2.5, 1.0), (1.0, 2.5), (-0.5, 1.0)]);
    let options = ClipOptions::new().with_epsilon(1e-12);

    for op in [ClipOp::Union, ClipOp::Intersect, ClipOp::Subtract, ClipOp::Xor] {
        let result = Clip::new(op, &square, &diamond)
            .with_options(options)
            .execute()?;
        println!(
            "{op:?}: {} contour(s), area {:.4}",
            result.len(),
            Area::new(&result).execute()
        );
        for contour in &result {
            let kind = if contour.hole { "hole" } else { "outer" };
            let points: Vec<String> = contour
                .points
                .iter()
                .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
                .collect();
            println!("  {kind}: {}", points.join(" "));
        }
    }
    Ok(())
}
