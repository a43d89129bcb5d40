//! Demo: sample an ellipse with random semi-axes, maybe rotate it, fit it into
//! the unit square and print the points.
use anyhow::{Context, Result};
use docopt::Docopt;
use ellipse_fit::{generate_with_rng, BoundingBox, EllipseSpec, Point};
use gnuplot::{AxesCommon, Figure, Fix};
use pcg_rand::Pcg32;
use rand::{Rng, SeedableRng};
use serde_derive::Deserialize;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "
Sample points on a random ellipse and fit them into the unit square.

Usage:
  ellipse_fit [options]
  ellipse_fit (-h | --help)
  ellipse_fit --version

Options:
  -h --help      Show this screen.
  --version      Show version.
  --points=<n>   Number of points [default: 100].
  --seed=<s>     Seed of the random generator.
  --plot         Show the points in a gnuplot window.
";

#[derive(Debug, Deserialize)]
struct Args {
    flag_points: usize,
    flag_seed: Option<u64>,
    flag_plot: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.version(Some(env!("CARGO_PKG_VERSION").to_owned())).deserialize())
        .unwrap_or_else(|e| e.exit());

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = Pcg32::seed_from_u64(seed);

    let rotate = rng.gen::<bool>();
    let semi_major = rng.gen_range(10.0..20.0);
    let semi_minor = rng.gen_range(1.0..3.0);
    let bbox = BoundingBox::unit();
    info!(seed, semi_major, semi_minor, rotate, n = args.flag_points, "ellipse parameters");

    let spec = EllipseSpec::new(args.flag_points, semi_major, semi_minor, rotate)
        .context("bad ellipse parameters")?;
    let ps = generate_with_rng(&spec, &bbox, &mut rng).context("cannot fit ellipse into the box")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for &Point(x, y) in &ps {
        writeln!(out, "({:?}, {:?})", x, y)?;
    }
    out.flush()?;

    if args.flag_plot {
        plot(&ps, &bbox);
    }

    Ok(())
}

fn plot(ps: &[Point], bbox: &BoundingBox) {
    let mut fg = Figure::new();
    fg.axes2d()
        .set_aspect_ratio(Fix(1.))
        .set_x_range(Fix(bbox.x_min), Fix(bbox.x_max))
        .set_y_range(Fix(bbox.y_min), Fix(bbox.y_max))
        .points(ps.iter().map(|p| p.0), ps.iter().map(|p| p.1), &[]);
    fg.show();
}
