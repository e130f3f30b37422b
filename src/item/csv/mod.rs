/// Row-by-row CSV output.
///
/// [`csv_writer::CsvItemWriter`] renders each row with
/// [`stringify_make_row`](crate::core::stringify::stringify_make_row) as soon as it is
/// written, instead of building the whole document in memory like
/// [`to_csv`](crate::core::stringify::to_csv). Both produce the same text for the same
/// options.
///
/// # Ownership and Borrowing Considerations
///
/// The writer owns its destination. To read a buffer back after writing, either pass
/// `&mut buffer` to `from_writer` and drop the writer first, or take the destination
/// back with `into_inner`.
///
/// # Examples
///
/// ## Writing to a file
///
/// ```
/// use csv_4180::core::{item::ItemWriter, quote::Quoter};
/// use csv_4180::item::csv::csv_writer::CsvItemWriterBuilder;
/// use std::env::temp_dir;
///
/// let path = temp_dir().join("csv_4180_cities.csv");
///
/// let writer = CsvItemWriterBuilder::new()
///     .headers(["city", "pop"])
///     .quoter(Quoter::ExceptNumbers)
///     .from_path(&path)
///     .unwrap();
///
/// writer.write(["Boston", "4628910"].as_slice()).unwrap();
/// writer.write(["Concord", "42695"].as_slice()).unwrap();
/// ItemWriter::<[&str]>::close(&writer).unwrap();
/// drop(writer);
///
/// let content = std::fs::read_to_string(&path).unwrap();
/// assert_eq!(content, "\"city\",\"pop\"\r\n\"Boston\",4628910\r\n\"Concord\",42695");
/// # std::fs::remove_file(&path).ok();
/// ```
///
/// ## Writing into a borrowed buffer
///
/// ```
/// use csv_4180::core::item::ItemWriter;
/// use csv_4180::item::csv::csv_writer::CsvItemWriterBuilder;
///
/// let mut buffer = Vec::new();
/// {
///     let writer = CsvItemWriterBuilder::new()
///         .field_separator(";")
///         .from_writer(&mut buffer);
///
///     writer.write([1, 2].as_slice()).unwrap();
///     writer.write([3, 4].as_slice()).unwrap();
///     ItemWriter::<[i32]>::close(&writer).unwrap();
/// } // writer is dropped here, releasing the borrow
///
/// assert_eq!(String::from_utf8(buffer).unwrap(), "1;2\r\n3;4");
/// ```
pub mod csv_writer;
