//! Read point samples from delimited text.
//!
//! The input is one record per line, with at least four delimited columns:
//! x, y, z, and size. Columns past the fourth are ignored, and lines with fewer
//! than four columns are skipped. The first line is a header and is dropped:
//!
//! ```
//! use pointnorm::Reader;
//! let text = "x,y,z,size\n1,2,3,10\n3,4,5,30\n1,2,3\n";
//! let dataset = Reader::default().read_str(text).unwrap();
//! assert_eq!(2, dataset.len());
//! ```
//!
//! Use [Options] to read headerless files, change the delimiter, or decide
//! what happens to values that aren't numbers:
//!
//! ```
//! use pointnorm::reader::{InvalidNumber, Options, Reader};
//! let reader = Reader::new(Options {
//!     has_header: false,
//!     delimiter: b';',
//!     invalid_number: InvalidNumber::SkipRow,
//! });
//! let dataset = reader.read_str("1;2;3;10\n1;two;3;10\n").unwrap();
//! assert_eq!(1, dataset.len());
//! ```

use crate::{Dataset, Error, Field, Record, Result, Source};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};
use std::io::Read;
use std::path::Path;

/// The number of columns a line needs to become a record.
pub const MINIMUM_COLUMNS: usize = 4;

/// What to do with a column that can't be parsed as a number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InvalidNumber {
    /// Read the value as NaN and keep the row.
    #[default]
    Nan,

    /// Drop the whole row.
    SkipRow,

    /// Fail the load with [Error::InvalidNumber].
    Fail,
}

/// Reader configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Is the first line a header?
    ///
    /// If true, the first line is discarded no matter what it contains.
    pub has_header: bool,

    /// The column delimiter, a single ASCII byte.
    pub delimiter: u8,

    /// The policy for values that aren't numbers.
    pub invalid_number: InvalidNumber,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            has_header: true,
            delimiter: b',',
            invalid_number: InvalidNumber::default(),
        }
    }
}

/// Reads delimited text into a [Dataset].
#[derive(Clone, Copy, Debug, Default)]
pub struct Reader {
    options: Options,
}

impl Reader {
    /// Creates a reader with the given options.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::reader::{Options, Reader};
    /// let reader = Reader::new(Options { has_header: false, ..Default::default() });
    /// assert!(!reader.options().has_header);
    /// ```
    pub fn new(options: Options) -> Reader {
        Reader { options }
    }

    /// Returns this reader's options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Fetches the text from a source and parses it.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use pointnorm::Reader;
    /// let reader = Reader::default();
    /// let future = reader.load(Path::new("tests/data/points.csv"));
    /// let dataset = futures::executor::block_on(future).unwrap();
    /// assert!(!dataset.is_empty());
    /// ```
    pub async fn load<S: Source>(&self, mut source: S) -> Result<Dataset> {
        debug!("fetching {}", source.name());
        let bytes = source.fetch().await?;
        self.read_bytes(bytes)
    }

    /// Reads a file from the filesystem, blocking until it has been parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::Reader;
    /// let dataset = Reader::default().read_path("tests/data/points.csv").unwrap();
    /// ```
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<Dataset> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|error| Error::SourceUnavailable {
            source_name: path.display().to_string(),
            error,
        })?;
        self.read_bytes(bytes)
    }

    /// Reads everything from a `Read` and parses it.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use pointnorm::Reader;
    /// let read = Cursor::new("x,y,z,size\n1,2,3,4\n");
    /// let dataset = Reader::default().read_from(read).unwrap();
    /// assert_eq!(1, dataset.len());
    /// ```
    pub fn read_from<R: Read>(&self, mut read: R) -> Result<Dataset> {
        let mut bytes = Vec::new();
        let _ = read
            .read_to_end(&mut bytes)
            .map_err(|error| Error::SourceUnavailable {
                source_name: "reader".to_string(),
                error,
            })?;
        self.read_bytes(bytes)
    }

    /// Parses UTF-8 bytes.
    pub fn read_bytes(&self, bytes: Vec<u8>) -> Result<Dataset> {
        let text = String::from_utf8(bytes)?;
        self.read_str(&text)
    }

    /// Parses text.
    ///
    /// Lines end in `\n` or `\r\n`, and blank lines are ignored. Columns are
    /// trimmed before parsing.
    pub fn read_str(&self, text: &str) -> Result<Dataset> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.options.delimiter)
            .quoting(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());
        let mut row = StringRecord::new();
        let mut records = Vec::new();
        let mut short_rows = 0;
        let mut invalid_numbers = 0;
        let mut skipped_rows = 0;
        'rows: while reader.read_record(&mut row)? {
            let line = row.position().map_or(0, |position| position.line());
            if self.options.has_header && line == 1 {
                continue;
            }
            if row.len() < MINIMUM_COLUMNS {
                short_rows += 1;
                continue;
            }
            let mut values = [0.; MINIMUM_COLUMNS];
            for (&field, text) in Field::ALL.iter().zip(row.iter()) {
                values[field.column()] = match parse_number(text) {
                    Some(value) => value,
                    None => match self.options.invalid_number {
                        InvalidNumber::Nan => {
                            invalid_numbers += 1;
                            f64::NAN
                        }
                        InvalidNumber::SkipRow => {
                            skipped_rows += 1;
                            continue 'rows;
                        }
                        InvalidNumber::Fail => {
                            return Err(Error::InvalidNumber {
                                line,
                                field,
                                text: text.to_string(),
                            });
                        }
                    },
                };
            }
            records.push(Record::from(values));
        }
        if invalid_numbers > 0 {
            warn!("{} values were not numbers and were read as NaN", invalid_numbers);
        }
        if skipped_rows > 0 {
            debug!("skipped {} rows with values that were not numbers", skipped_rows);
        }
        debug!(
            "read {} records, skipped {} rows with fewer than {} columns",
            records.len(),
            short_rows,
            MINIMUM_COLUMNS
        );
        Ok(Dataset::new(records))
    }
}

/// Parses a finite number.
///
/// `NaN`, `inf`, and friends are not numbers here, so they go through the
/// [InvalidNumber] policy like any other bad value.
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Loads a dataset from a source with the default [Options].
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// let future = pointnorm::load(Path::new("tests/data/points.csv"));
/// let dataset = futures::executor::block_on(future).unwrap();
/// ```
pub async fn load<S: Source>(source: S) -> Result<Dataset> {
    Reader::default().load(source).await
}
