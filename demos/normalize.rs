//! Normalizes a point file and writes the result to stdout.
//!
//! Usage: `normalize <path> [min-max|centered]`

use pointnorm::normalize::{Degenerate, Normalizer};
use pointnorm::{Method, Writer};
use std::path::Path;

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("Must provide a path to a point file");
    let method = match args.next().as_deref() {
        None | Some("min-max") => Method::MinMax,
        Some("centered") => Method::CenteredMaxAbs,
        Some(other) => panic!("Unknown method: {}", other),
    };

    let dataset = futures::executor::block_on(pointnorm::load(Path::new(&path)))
        .expect("Unable to load points");
    let normalizer = Normalizer {
        method,
        degenerate: Degenerate::Zero,
        ..Default::default()
    };
    let normalized = normalizer
        .normalize(&dataset)
        .expect("Unable to normalize points");

    let stdout = std::io::stdout();
    let mut writer = Writer::new(stdout.lock()).expect("Unable to write header");
    writer
        .write_dataset(&normalized)
        .expect("Unable to write records");
    let _ = writer.into_inner().expect("Unable to flush stdout");
}
