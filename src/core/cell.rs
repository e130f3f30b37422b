use std::fmt::{self, Display};

use serde_json::Value;

use crate::CsvError;

/// A single scalar value of a row.
///
/// Quoting decisions are always taken on the textual form of a cell, which is its
/// [`Display`] output. Documents mixing text and numbers are built from `Cell`s,
/// homogeneous ones can use `&str`, `String` or any number type directly.
///
/// Floats are written the way JavaScript prints numbers: `-0.0` as `0`, infinities as
/// `Infinity` and `-Infinity`, and magnitudes from `1e21` up or below `1e-6` in exponent
/// form (`1e+21`, `1e-7`). Everything in between uses the shortest round-trip digits.
///
/// ```
/// use csv_4180::core::cell::Cell;
///
/// let row: Vec<Cell> = vec!["ace".into(), 1.into(), 2.5.into(), true.into()];
/// let texts: Vec<String> = row.iter().map(ToString::to_string).collect();
/// assert_eq!(texts, ["ace", "1", "2.5", "true"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Integer(value) => write!(f, "{}", value),
            Cell::Float(value) => write_float(f, *value),
            Cell::Bool(value) => write!(f, "{}", value),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return f.write_str("0");
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", value);
    }

    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&scientific),
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<f32> for Cell {
    fn from(value: f32) -> Self {
        Cell::Float(f64::from(value))
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Cell {
                fn from(value: $ty) -> Self {
                    Cell::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<&Cell> for Value {
    fn from(cell: &Cell) -> Self {
        match cell {
            Cell::Integer(value) => Value::from(*value),
            Cell::Float(value) => Value::from(*value),
            Cell::Bool(value) => Value::Bool(*value),
            Cell::Text(value) => Value::String(value.clone()),
        }
    }
}

impl TryFrom<&Value> for Cell {
    type Error = CsvError;

    /// Converts a JSON scalar. `null` becomes an empty text cell.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Cell::Text(String::new())),
            Value::Bool(value) => Ok(Cell::Bool(*value)),
            Value::String(value) => Ok(Cell::Text(value.clone())),
            Value::Number(number) => match number.as_i64() {
                Some(value) => Ok(Cell::Integer(value)),
                // u64 beyond i64::MAX keeps its exact JSON text
                None if number.is_u64() => Ok(Cell::Text(number.to_string())),
                None => number
                    .as_f64()
                    .map(Cell::Float)
                    .ok_or_else(|| CsvError::UnsupportedCell(number.to_string())),
            },
            Value::Array(_) | Value::Object(_) => {
                Err(CsvError::UnsupportedCell(value.to_string()))
            }
        }
    }
}

/// Converts a JSON array of arrays into a document.
pub fn document_from_json(value: &Value) -> Result<Vec<Vec<Cell>>, CsvError> {
    let rows = value.as_array().ok_or_else(|| {
        CsvError::Document(format!("expected an array of rows, got {value}"))
    })?;

    rows.iter()
        .map(|row| -> Result<Vec<Cell>, CsvError> {
            row.as_array()
                .ok_or_else(|| CsvError::Document(format!("expected a row array, got {row}")))?
                .iter()
                .map(Cell::try_from)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn cells_should_render_their_textual_form() {
        assert_eq!(Cell::from("a\"b").to_string(), "a\"b");
        assert_eq!(Cell::from(42).to_string(), "42");
        assert_eq!(Cell::from(-7i64).to_string(), "-7");
        assert_eq!(Cell::from(1.0).to_string(), "1");
        assert_eq!(Cell::from(123.45).to_string(), "123.45");
        assert_eq!(Cell::from(false).to_string(), "false");
    }

    #[test]
    fn floats_should_render_like_javascript_numbers() {
        assert_eq!(Cell::from(-0.0).to_string(), "0");
        assert_eq!(Cell::from(0.1).to_string(), "0.1");
        assert_eq!(Cell::from(-2.5).to_string(), "-2.5");
        assert_eq!(Cell::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(Cell::from(1e21).to_string(), "1e+21");
        assert_eq!(Cell::from(-1.5e300).to_string(), "-1.5e+300");
        assert_eq!(Cell::from(0.000001).to_string(), "0.000001");
        assert_eq!(Cell::from(1e-7).to_string(), "1e-7");
        assert_eq!(Cell::from(-2.5e-8).to_string(), "-2.5e-8");
        assert_eq!(Cell::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Cell::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Cell::from(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn cells_should_convert_back_to_json() {
        assert_eq!(Value::from(&Cell::from("x")), json!("x"));
        assert_eq!(Value::from(&Cell::from(7)), json!(7));
        assert_eq!(Value::from(&Cell::from(0.5)), json!(0.5));
        assert_eq!(Value::from(&Cell::from(true)), json!(true));
    }

    #[test]
    fn json_scalars_should_convert() {
        assert_eq!(Cell::try_from(&json!("x")), Ok(Cell::Text("x".to_string())));
        assert_eq!(Cell::try_from(&json!(3)), Ok(Cell::Integer(3)));
        assert_eq!(Cell::try_from(&json!(0.5)), Ok(Cell::Float(0.5)));
        assert_eq!(Cell::try_from(&json!(true)), Ok(Cell::Bool(true)));
        assert_eq!(Cell::try_from(&json!(null)), Ok(Cell::Text(String::new())));
        assert_eq!(
            Cell::try_from(&json!(u64::MAX)),
            Ok(Cell::Text("18446744073709551615".to_string()))
        );
    }

    #[test]
    fn json_containers_should_be_rejected() {
        let result = Cell::try_from(&json!([1, 2]));
        assert_eq!(result, Err(CsvError::UnsupportedCell("[1,2]".to_string())));

        let result = Cell::try_from(&json!({"a": 1}));
        assert!(matches!(result, Err(CsvError::UnsupportedCell(_))));
    }

    #[test]
    fn json_document_should_keep_ragged_rows() {
        let document = document_from_json(&json!([["ace", "deuce", "tres"], [1, 2]])).unwrap();

        assert_eq!(document.len(), 2);
        assert_eq!(document[0].len(), 3);
        assert_eq!(document[1], vec![Cell::Integer(1), Cell::Integer(2)]);
    }

    #[test]
    fn json_document_must_be_an_array_of_arrays() {
        let result = document_from_json(&json!({"rows": []}));
        assert!(matches!(result, Err(CsvError::Document(_))));

        let result = document_from_json(&json!([1, 2]));
        assert_eq!(
            result,
            Err(CsvError::Document("expected a row array, got 1".to_string()))
        );

        let result = document_from_json(&json!([[1, [2]]]));
        assert!(matches!(result, Err(CsvError::UnsupportedCell(_))));
    }
}
