//! Walks the reference cubic curve and lays a run of glyph anchors on it.
//!
//! Usage:
//! ```text
//! cargo run --example walk_curve                       # default step
//! cargo run --example walk_curve -- 0.0001             # custom step
//! RUST_LOG=pathtext=trace cargo run --example walk_curve
//! ```

use pathtext::math::Point2;
use pathtext::{GlyphAnchor, Path, PathTextError, PlaceGlyphs, TangentGenerator, WalkParams};
use tracing::info;

fn main() -> Result<(), PathTextError> {
    // Default: WARN for everything, INFO for pathtext and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=pathtext=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("walk_curve=info".parse().unwrap_or_default())
        .add_directive("pathtext=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let params = match std::env::args().nth(1) {
        Some(arg) => {
            let step = arg.parse::<f64>().unwrap_or(f64::NAN);
            WalkParams::new(step)?
        }
        None => WalkParams::default(),
    };

    let path = Path::new()
        .move_to(Point2::new(50.0, 500.0))
        .curve_to(
            Point2::new(300.0, 300.0),
            Point2::new(400.0, 700.0),
            Point2::new(650.0, 500.0),
        );

    let mut generator = TangentGenerator::with_params(&path, params);
    for distance in (0..=700_u32).step_by(100).map(f64::from) {
        match generator.get_tangent(distance) {
            Some(tangent) => info!(
                distance,
                t = tangent.t,
                x = tangent.point.x,
                y = tangent.point.y,
                angle = tangent.angle,
                "tangent"
            ),
            None => {
                info!(distance, "path exhausted");
                break;
            }
        }
    }

    // Ten glyphs, 60 units wide, on one baseline.
    let anchors = (0..10_u8)
        .map(|i| GlyphAnchor::centered(usize::from(i), 60.0 * f64::from(i), 60.0))
        .collect();
    let placements = PlaceGlyphs::new(anchors, params).execute(&path);
    for placement in &placements {
        let origin = placement.transform_point(&Point2::new(placement.anchor, 0.0));
        info!(
            glyph = placement.index,
            x = origin.x,
            y = origin.y,
            angle = placement.tangent.angle,
            "placed"
        );
    }
    info!(placed = placements.len(), "done");

    Ok(())
}
