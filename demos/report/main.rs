//! Quadrix report demo — prints the analysis report and grid statistics
//! for one quadric surface.
//!
//! Usage:
//! ```text
//! cargo run --example report                      # default (ellipsoid)
//! cargo run --example report -- one-sheet x      # family and axis
//! cargo run --example report -- cylinder-parabolic
//! ```

use quadrix::params::{GridResolution, SampleDomain, SurfaceParameters};
use quadrix::surface::{Axis, CylinderKind, Quadric, SurfaceKind};

fn main() {
    // Default: WARN for everything, INFO for quadrix.
    // Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("quadrix=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let kind = args
        .next()
        .map_or(SurfaceKind::Ellipsoid, |name| parse_kind(&name));
    let axis = args.next().map_or(Axis::Z, |name| parse_axis(&name));

    let quadric = Quadric::new(kind, axis, SurfaceParameters::default());
    print!("{}", quadric.report());

    let sample = quadric.sample(GridResolution::default(), SampleDomain::default());
    let primary = sample.primary();
    println!();
    println!(
        "Sampled {} branch(es) of {}x{} points; {} of {} primary samples are on the surface.",
        sample.branches().count(),
        primary.rows(),
        primary.cols(),
        primary.valid_count(),
        primary.rows() * primary.cols(),
    );

    let traces = quadric.traces(GridResolution::default());
    if !traces.is_empty() {
        println!("Center-plane traces: {}", traces.len());
    }
}

fn parse_kind(name: &str) -> SurfaceKind {
    match name {
        "ellipsoid" => SurfaceKind::Ellipsoid,
        "cone" => SurfaceKind::EllipticCone,
        "one-sheet" => SurfaceKind::HyperboloidOneSheet,
        "two-sheets" => SurfaceKind::HyperboloidTwoSheets,
        "paraboloid" => SurfaceKind::EllipticParaboloid,
        "saddle" => SurfaceKind::HyperbolicParaboloid,
        "cylinder" | "cylinder-elliptic" => SurfaceKind::Cylinder(CylinderKind::Elliptic),
        "cylinder-hyperbolic" => SurfaceKind::Cylinder(CylinderKind::Hyperbolic),
        "cylinder-parabolic" => SurfaceKind::Cylinder(CylinderKind::Parabolic),
        other => {
            eprintln!(
                "unknown surface '{other}'; expected one of: ellipsoid, cone, one-sheet, \
                 two-sheets, paraboloid, saddle, cylinder[-elliptic|-hyperbolic|-parabolic]"
            );
            std::process::exit(1);
        }
    }
}

fn parse_axis(name: &str) -> Axis {
    match name {
        "x" => Axis::X,
        "y" => Axis::Y,
        "z" => Axis::Z,
        other => {
            eprintln!("unknown axis '{other}'; expected x, y or z");
            std::process::exit(1);
        }
    }
}
