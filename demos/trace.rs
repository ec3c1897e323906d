//! Isotrace demo — loads a curve file and prints the assembled polylines.
//!
//! Usage:
//! ```text
//! cargo run --example trace                 # reads curves.txt
//! cargo run --example trace -- contour.txt  # explicit input file
//! ```
//!
//! Prints three blocks: vertex indices per polyline, resolved coordinates
//! per polyline, and the open/closed verdict per polyline.

use isotrace::loader::load_curve;
use isotrace::operations::{
    assemble_polylines, classify_outline, resolve_coordinates, OutlineClassification,
};
use isotrace::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for isotrace.
    // Override with RUST_LOG env var (e.g. RUST_LOG=isotrace=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("isotrace=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "curves.txt".to_owned());
    let curve = load_curve(&path)?;
    let table = curve.point_table();

    let polylines = assemble_polylines(curve.segments());

    for polyline in &polylines {
        print!("[ ");
        for index in &polyline.vertices {
            print!("{index} ");
        }
        println!("]");
    }

    for polyline in &polylines {
        let coordinates = resolve_coordinates(polyline, &table)?;
        print!("[ ");
        for p in &coordinates {
            print!("({:.1} , {:.1}) ", p.x, p.y);
        }
        println!("]");
    }

    for polyline in &polylines {
        let verdict = match classify_outline(polyline) {
            OutlineClassification::Closed => "Closed",
            OutlineClassification::Open => "Open",
        };
        println!("{verdict} outline");
    }

    Ok(())
}
