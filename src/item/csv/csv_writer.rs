use std::{
    cell::{Cell, RefCell},
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    result,
};

use log::{debug, trace};

use crate::{
    CsvError,
    core::{
        item::ItemWriter,
        quote::Quoter,
        stringify::{StringifyOptions, stringify_make_row},
    },
};

/// Writes a CSV document row by row.
///
/// Writing rows then calling [`ItemWriter::close`] produces the same text as
/// [`to_csv`](crate::core::stringify::to_csv) with the same options.
pub struct CsvItemWriter<T: Write> {
    wrapper: RefCell<T>,
    options: StringifyOptions,
    opened: Cell<bool>,
    closed: Cell<bool>,
    row_count: Cell<usize>,
}

impl<T: Write> CsvItemWriter<T> {
    fn write_str(&self, text: &str) -> Result<(), CsvError> {
        let result = self.wrapper.borrow_mut().write_all(text.as_bytes());
        match result {
            Ok(()) => Ok(()),
            Err(error) => Err(CsvError::ItemWriter(error.to_string())),
        }
    }

    /// Number of data rows written so far.
    pub fn row_count(&self) -> usize {
        self.row_count.get()
    }

    /// Flushes and returns the destination.
    pub fn into_inner(self) -> result::Result<T, CsvError> {
        let mut inner = self.wrapper.into_inner();
        match inner.flush() {
            Ok(()) => Ok(inner),
            Err(error) => Err(CsvError::ItemWriter(error.to_string())),
        }
    }
}

impl<T: Write, C: Display> ItemWriter<[C]> for CsvItemWriter<T> {
    fn write(&self, item: &[C]) -> Result<(), CsvError> {
        ItemWriter::<[C]>::open(self)?;

        let line = stringify_make_row(item, &self.options.quoter, &self.options.field_separator);
        trace!("Row: {}", line);

        // one write per row, separator included
        let chunk = if self.row_count.get() > 0 {
            self.options.row_separator.clone() + &line
        } else {
            line
        };
        self.write_str(&chunk)?;

        self.row_count.set(self.row_count.get() + 1);
        Ok(())
    }

    /// Flush the underlying writer.
    fn flush(&self) -> Result<(), CsvError> {
        let result = self.wrapper.borrow_mut().flush();
        match result {
            Ok(()) => Ok(()),
            Err(error) => Err(CsvError::ItemWriter(error.to_string())),
        }
    }

    /// Writes the header line, once.
    fn open(&self) -> Result<(), CsvError> {
        if self.opened.get() {
            return Ok(());
        }

        debug!("Start of CSV output, quoter {}", self.options.quoter);

        if let Some(headers) = &self.options.headers {
            let line = stringify_make_row(
                headers.as_slice(),
                &self.options.quoter,
                &self.options.field_separator,
            ) + &self.options.row_separator;
            self.write_str(&line)?;
        }

        self.opened.set(true);
        Ok(())
    }

    /// Writes the trailing row separator if configured, then flushes. Calling it again
    /// does nothing.
    fn close(&self) -> Result<(), CsvError> {
        if self.closed.get() {
            return Ok(());
        }
        ItemWriter::<[C]>::open(self)?;

        if self.options.trailing_row_separator {
            self.write_str(&self.options.row_separator)?;
        }
        self.closed.set(true);

        debug!("End of CSV output: {} rows", self.row_count.get());

        ItemWriter::<[C]>::flush(self)
    }
}

#[derive(Default)]
pub struct CsvItemWriterBuilder {
    options: StringifyOptions,
}

impl CsvItemWriterBuilder {
    pub fn new() -> CsvItemWriterBuilder {
        CsvItemWriterBuilder {
            options: StringifyOptions::default(),
        }
    }

    /// Replaces every option at once.
    pub fn options(mut self, options: StringifyOptions) -> CsvItemWriterBuilder {
        self.options = options;
        self
    }

    pub fn headers(
        mut self,
        headers: impl IntoIterator<Item = impl Into<crate::core::cell::Cell>>,
    ) -> CsvItemWriterBuilder {
        self.options.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn quoter(mut self, quoter: Quoter) -> CsvItemWriterBuilder {
        self.options.quoter = quoter;
        self
    }

    pub fn field_separator(mut self, field_separator: &str) -> CsvItemWriterBuilder {
        self.options.field_separator = field_separator.to_string();
        self
    }

    pub fn row_separator(mut self, row_separator: &str) -> CsvItemWriterBuilder {
        self.options.row_separator = row_separator.to_string();
        self
    }

    pub fn trailing_row_separator(mut self, yes: bool) -> CsvItemWriterBuilder {
        self.options.trailing_row_separator = yes;
        self
    }

    pub fn from_path<R: AsRef<Path>>(
        self,
        path: R,
    ) -> Result<CsvItemWriter<BufWriter<File>>, CsvError> {
        let file =
            File::create(path).map_err(|error| CsvError::ItemWriter(error.to_string()))?;

        Ok(self.from_writer(BufWriter::new(file)))
    }

    /// Writes rows to any destination.
    ///
    /// # Example
    ///
    /// ```
    /// # use std::error::Error;
    /// # use csv_4180::{core::item::ItemWriter, item::csv::csv_writer::CsvItemWriterBuilder};
    /// # fn main() { example().unwrap(); }
    /// fn example() -> Result<(), Box<dyn Error>> {
    ///     let wtr = CsvItemWriterBuilder::new()
    ///         .headers(["city", "country", "popcount"])
    ///         .row_separator("\n")
    ///         .trailing_row_separator(true)
    ///         .from_writer(vec![]);
    ///
    ///     wtr.write(["Boston", "United States", "4628910"].as_slice())?;
    ///     wtr.write(["Concord", "United States", "42695"].as_slice())?;
    ///     ItemWriter::<[&str]>::close(&wtr)?;
    ///
    ///     let data = String::from_utf8(wtr.into_inner()?)?;
    ///     assert_eq!(data, "\
    /// city,country,popcount
    /// Boston,United States,4628910
    /// Concord,United States,42695
    /// ");
    ///     Ok(())
    /// }
    /// ```
    pub fn from_writer<W: Write>(self, wtr: W) -> CsvItemWriter<W> {
        CsvItemWriter {
            wrapper: RefCell::new(wtr),
            options: self.options,
            opened: Cell::new(false),
            closed: Cell::new(false),
            row_count: Cell::new(0),
        }
    }
}
