//! Load xyz+size point samples from delimited text and normalize them for
//! visualization.
//!
//! # Loading
//!
//! Load a dataset from any [Source], e.g. a path:
//!
//! ```
//! use std::path::Path;
//! let future = pointnorm::load(Path::new("tests/data/points.csv"));
//! let dataset = futures::executor::block_on(future).unwrap();
//! ```
//!
//! The first line is a header and is always discarded. Every other line needs
//! at least four comma-separated columns (x, y, z, and size); shorter lines are
//! skipped. Use a [Reader] to change any of that, or to read synchronously:
//!
//! ```
//! use pointnorm::Reader;
//! let dataset = Reader::default().read_path("tests/data/points.csv").unwrap();
//! for record in &dataset {
//!     println!("{}", record);
//! }
//! ```
//!
//! # Normalizing
//!
//! Rescale into `[0, 1]` per field:
//!
//! ```
//! use pointnorm::{Method, Reader};
//! let dataset = Reader::default().read_path("tests/data/points.csv").unwrap();
//! let normalized = pointnorm::normalize(&dataset, Method::MinMax);
//! ```
//!
//! Or center on the mean and rescale into `[-1, 1]`, keeping the aspect ratio
//! of the point cloud:
//!
//! ```
//! use pointnorm::{Method, Reader};
//! let dataset = Reader::default().read_path("tests/data/points.csv").unwrap();
//! let normalized = pointnorm::normalize(&dataset, Method::CenteredMaxAbs);
//! ```
//!
//! Use a [Normalizer](normalize::Normalizer) to decide what happens to fields
//! that have no spread.
//!
//! # Writing
//!
//! ```
//! use std::io::Cursor;
//! use pointnorm::{Method, Reader, Writer};
//! let dataset = Reader::default().read_path("tests/data/points.csv").unwrap();
//! let normalized = pointnorm::normalize(&dataset, Method::MinMax);
//! let mut writer = Writer::new(Cursor::new(Vec::new())).unwrap();
//! writer.write_dataset(&normalized).unwrap();
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces
)]

pub mod normalize;
pub mod reader;
pub mod source;
pub mod writer;

mod bounds;
mod dataset;
mod error;
mod record;

pub use bounds::Bounds;
pub use dataset::Dataset;
pub use error::Error;
pub use normalize::{Method, normalize, normalize_centered, normalize_min_max};
pub use reader::{Reader, load};
pub use record::{Field, Record};
pub use source::{AsyncSource, Source};
pub use writer::Writer;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
