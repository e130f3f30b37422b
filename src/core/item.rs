use crate::error::CsvError;

/// Destination receiving a document one row at a time.
///
/// `open` is called before the first row and `close` after the last one.
pub trait ItemWriter<W: ?Sized> {
    fn write(&self, item: &W) -> Result<(), CsvError>;
    fn flush(&self) -> Result<(), CsvError>;
    fn open(&self) -> Result<(), CsvError> {
        Ok(())
    }
    fn close(&self) -> Result<(), CsvError> {
        Ok(())
    }
}
