use std::fmt::Display;

use log::info;

use crate::{
    CsvError,
    core::{
        item::ItemWriter,
        stringify::{StringifyOptions, stringify_make_row},
    },
};

/// Logs every row as the CSV line it would produce.
#[derive(Default)]
pub struct LoggerWriter {
    options: StringifyOptions,
}

impl LoggerWriter {
    pub fn new(options: StringifyOptions) -> Self {
        LoggerWriter { options }
    }
}

impl<C> ItemWriter<[C]> for LoggerWriter
where
    C: Display,
{
    fn write(&self, item: &[C]) -> Result<(), CsvError> {
        let line = stringify_make_row(item, &self.options.quoter, &self.options.field_separator);
        info!("Record:{}", line);
        Ok(())
    }

    fn flush(&self) -> Result<(), CsvError> {
        Ok(())
    }
}
