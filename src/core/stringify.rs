use std::fmt::Display;

use log::{debug, trace};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;

use crate::{
    CsvError,
    core::{
        cell::Cell,
        quote::{Quote, Quoter},
    },
};

/// Options controlling how [`to_csv`] renders a document.
///
/// Fields missing from a deserialized configuration keep their default value:
///
/// | Field                    | Default     |
/// |--------------------------|-------------|
/// | `headers`                | `None`      |
/// | `quoter`                 | `minimal`   |
/// | `field_separator`        | `","`       |
/// | `row_separator`          | `"\r\n"`    |
/// | `trailing_row_separator` | `false`     |
///
/// In a configuration, `headers` may also be `false` or `null`, both meaning no header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringifyOptions {
    /// Header row, rendered before the data rows with the same quoter and separators.
    #[serde(
        serialize_with = "serialize_headers",
        deserialize_with = "deserialize_headers"
    )]
    pub headers: Option<Vec<Cell>>,
    pub quoter: Quoter,
    pub field_separator: String,
    pub row_separator: String,
    /// Appends one more row separator after the last data row.
    pub trailing_row_separator: bool,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        StringifyOptions {
            headers: None,
            quoter: Quoter::Minimal,
            field_separator: ",".to_string(),
            row_separator: "\r\n".to_string(),
            trailing_row_separator: false,
        }
    }
}

fn serialize_headers<S>(headers: &Option<Vec<Cell>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    headers
        .as_ref()
        .map(|cells| cells.iter().map(Value::from).collect::<Vec<_>>())
        .serialize(serializer)
}

fn deserialize_headers<'de, D>(deserializer: D) -> Result<Option<Vec<Cell>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Array(cells) => cells
            .iter()
            .map(Cell::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
            .map_err(de::Error::custom),
        other => Err(de::Error::custom(format!(
            "invalid headers {other}, expected an array of cells or false"
        ))),
    }
}

impl StringifyOptions {
    /// Reads options from a JSON object, every field being optional.
    ///
    /// ```
    /// use csv_4180::core::{quote::Quoter, stringify::StringifyOptions};
    ///
    /// let options = StringifyOptions::from_json(r#"{"quoter": "always", "row_separator": "\n"}"#).unwrap();
    /// assert_eq!(options.quoter, Quoter::Always);
    /// assert_eq!(options.row_separator, "\n");
    /// assert_eq!(options.field_separator, ",");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CsvError> {
        serde_json::from_str(json).map_err(|error| CsvError::Config(error.to_string()))
    }
}

#[derive(Default)]
pub struct StringifyOptionsBuilder {
    options: StringifyOptions,
}

impl StringifyOptionsBuilder {
    pub fn new() -> StringifyOptionsBuilder {
        StringifyOptionsBuilder {
            options: StringifyOptions::default(),
        }
    }

    pub fn headers(mut self, headers: impl IntoIterator<Item = impl Into<Cell>>) -> Self {
        self.options.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn quoter(mut self, quoter: Quoter) -> Self {
        self.options.quoter = quoter;
        self
    }

    pub fn field_separator(mut self, field_separator: &str) -> Self {
        self.options.field_separator = field_separator.to_string();
        self
    }

    pub fn row_separator(mut self, row_separator: &str) -> Self {
        self.options.row_separator = row_separator.to_string();
        self
    }

    pub fn trailing_row_separator(mut self, yes: bool) -> Self {
        self.options.trailing_row_separator = yes;
        self
    }

    pub fn build(self) -> StringifyOptions {
        self.options
    }
}

/// Makes a single row of a CSV document.
///
/// Every cell is quoted by `quoter`, then the cells are joined with `field_separator`.
///
/// ```
/// use csv_4180::core::{quote::{quote_always, quote_minimal}, stringify::stringify_make_row};
///
/// assert_eq!(stringify_make_row(&[1, 2, 3], &quote_minimal, ","), "1,2,3");
/// assert_eq!(stringify_make_row(&[4, 5, 6], &quote_always, ":"), "\"4\":\"5\":\"6\"");
/// ```
pub fn stringify_make_row<C, Q>(row: &[C], quoter: &Q, field_separator: &str) -> String
where
    C: Display,
    Q: Quote + ?Sized,
{
    row.iter()
        .map(|cell| quoter.quote(&cell.to_string()).into_owned())
        .collect::<Vec<_>>()
        .join(field_separator)
}

/// Converts a document to CSV text.
///
/// ```
/// use csv_4180::core::{cell::Cell, stringify::{to_csv, StringifyOptions}};
///
/// let data: Vec<Vec<Cell>> = vec![
///     vec!["ace".into(), "deuce".into()],
///     vec![1.into(), 2.into()],
///     vec!["a\"b".into(), "c\r\nd".into()],
/// ];
///
/// let csv = to_csv(&data, &StringifyOptions::default());
/// assert_eq!(csv, "ace,deuce\r\n1,2\r\n\"a\"\"b\",\"c\r\nd\"");
/// ```
pub fn to_csv<R, C>(data: &[R], options: &StringifyOptions) -> String
where
    R: AsRef<[C]>,
    C: Display,
{
    debug!(
        "Start of document: {} rows, quoter {}",
        data.len(),
        options.quoter
    );

    let header = match &options.headers {
        Some(headers) => {
            stringify_make_row(headers.as_slice(), &options.quoter, &options.field_separator)
                + &options.row_separator
        }
        None => String::new(),
    };

    let body = data
        .iter()
        .map(|row| {
            let line =
                stringify_make_row(row.as_ref(), &options.quoter, &options.field_separator);
            trace!("Row: {}", line);
            line
        })
        .collect::<Vec<_>>()
        .join(&options.row_separator);

    let trailer = if options.trailing_row_separator {
        options.row_separator.as_str()
    } else {
        ""
    };

    let document = header + &body + trailer;

    debug!("End of document: {} bytes", document.len());

    document
}
