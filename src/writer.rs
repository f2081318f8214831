//! Write records as delimited text.
//!
//! The output starts with an `x,y,z,size` header line, so it can be read
//! straight back with the default [Reader](crate::Reader):
//!
//! ```
//! use std::io::Cursor;
//! use pointnorm::{Reader, Record, Writer};
//!
//! let mut writer = Writer::new(Cursor::new(Vec::new())).unwrap();
//! writer.write_record(&Record::new(0., 0.5, 1., 0.25)).unwrap();
//! let bytes = writer.into_inner().unwrap().into_inner();
//! assert_eq!("x,y,z,size\n0,0.5,1,0.25\n", String::from_utf8(bytes.clone()).unwrap());
//!
//! let dataset = Reader::default().read_bytes(bytes).unwrap();
//! assert_eq!(Some(&Record::new(0., 0.5, 1., 0.25)), dataset.first());
//! ```

use crate::{Dataset, Field, Record, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes records, one per line.
#[derive(Debug)]
pub struct Writer<W: Write> {
    write: W,
    delimiter: char,
    count: u64,
}

impl Writer<BufWriter<File>> {
    /// Creates a file and a buffered writer for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pointnorm::Writer;
    /// let file = tempfile::NamedTempFile::new().unwrap();
    /// let writer = Writer::from_path(file.path()).unwrap();
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Writer<BufWriter<File>>> {
        File::create(path)
            .map_err(crate::Error::from)
            .and_then(|file| Writer::new(BufWriter::new(file)))
    }
}

impl<W: Write> Writer<W> {
    /// Creates a comma-delimited writer and writes the header line.
    pub fn new(write: W) -> Result<Writer<W>> {
        Writer::with_delimiter(write, ',')
    }

    /// Creates a writer with a custom delimiter and writes the header line.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use pointnorm::Writer;
    /// let writer = Writer::with_delimiter(Cursor::new(Vec::new()), ';').unwrap();
    /// let bytes = writer.into_inner().unwrap().into_inner();
    /// assert_eq!(b"x;y;z;size\n".to_vec(), bytes);
    /// ```
    pub fn with_delimiter(mut write: W, delimiter: char) -> Result<Writer<W>> {
        let header = Field::ALL
            .iter()
            .map(|field| field.to_string())
            .collect::<Vec<_>>()
            .join(&delimiter.to_string());
        writeln!(write, "{}", header)?;
        Ok(Writer {
            write,
            delimiter,
            count: 0,
        })
    }

    /// Writes one record.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        let d = self.delimiter;
        writeln!(
            self.write,
            "{}{d}{}{d}{}{d}{}",
            record.x, record.y, record.z, record.size
        )?;
        self.count += 1;
        Ok(())
    }

    /// Writes every record in a dataset.
    pub fn write_dataset(&mut self, dataset: &Dataset) -> Result<()> {
        for record in dataset {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Returns the number of records written so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Flushes and returns the underlying `Write`.
    pub fn into_inner(mut self) -> Result<W> {
        self.write.flush()?;
        Ok(self.write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn nan_is_written_as_nan() {
        let mut writer = Writer::new(Cursor::new(Vec::new())).unwrap();
        writer
            .write_record(&Record::new(f64::NAN, 1., 2., 3.))
            .unwrap();
        assert_eq!(1, writer.count());
        let text = String::from_utf8(writer.into_inner().unwrap().into_inner()).unwrap();
        assert_eq!("x,y,z,size\nNaN,1,2,3\n", text);
    }

    #[test]
    fn dataset() {
        let dataset = Dataset::new(vec![Record::new(1., 2., 3., 4.), Record::new(5., 6., 7., 8.)]);
        let mut writer = Writer::new(Cursor::new(Vec::new())).unwrap();
        writer.write_dataset(&dataset).unwrap();
        assert_eq!(2, writer.count());
        let text = String::from_utf8(writer.into_inner().unwrap().into_inner()).unwrap();
        assert_eq!("x,y,z,size\n1,2,3,4\n5,6,7,8\n", text);
    }
}
