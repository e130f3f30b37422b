#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # CSV 4180

 Converts in-memory tabular data (rows of cells) into comma-separated-values text
 following the common RFC-4180 conventions: configurable field and row separators,
 an optional header row, and a pluggable policy deciding which cells get quoted.

 Only the data to text direction is covered. Parsing CSV is out of scope.

 ## Core Concepts

- **Cell:** one scalar value. Anything implementing `Display` can be used; [`core::cell::Cell`]
  mixes text, integers, floats and booleans in one row.
- **Quoting policy:** decides, from the textual form of a cell, whether to wrap it in double
  quotes. Embedded double quotes are always doubled when a cell is wrapped.
- **Row:** cells quoted then joined with the field separator.
- **Document:** rows joined with the row separator, optionally preceded by a header row and
  followed by a trailing row separator.

 ## Quoting policies

| **Name**         | **Quotes a cell when it contains**                          |
|------------------|-------------------------------------------------------------|
| `minimal`        | `\r`, `\n`, `,` or `"` (default)                            |
| `always`         | anything                                                    |
| `strict_nl`      | `\r\n`, `,` or `"`; bare `\r` and `\n` stay unquoted         |
| `except_numbers` | a character other than ASCII digits, `.`, `+` and `-`       |

 ## Features

| **Feature** | **Description**                                                  |
|-------------|------------------------------------------------------------------|
| writer      | Enables `CsvItemWriter`, writing rows one at a time (default)    |
| logger      | Enables a logger `ItemWriter`, useful for debugging purposes     |
| full        | Enables all available features                                   |

 ## Getting Started

```rust
use csv_4180::{Quoter, StringifyOptionsBuilder, to_csv};

let data = vec![vec!["ace", "deuce", "tres"], vec!["1", "2", "3"]];
assert_eq!(to_csv(&data, &Default::default()), "ace,deuce,tres\r\n1,2,3");

let options = StringifyOptionsBuilder::new()
    .headers(["A", "B", "C"])
    .quoter(Quoter::ExceptNumbers)
    .row_separator("\n")
    .trailing_row_separator(true)
    .build();

assert_eq!(
    to_csv(&data, &options),
    "\"A\",\"B\",\"C\"\n\"ace\",\"deuce\",\"tres\"\n1,2,3\n"
);
```

 Policies can also be picked by name, for instance from configuration:

```rust
use csv_4180::{quoter_by_name, StringifyOptions};

let quote = quoter_by_name("always").unwrap();
assert_eq!(quote("x"), "\"x\"");

let options = StringifyOptions::from_json(r#"{"quoter": "strict_nl"}"#).unwrap();
assert_eq!(options.quoter.name(), "strict_nl");
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0 (<http://www.apache.org/licenses/LICENSE-2.0>)
 -   MIT license (<http://opensource.org/licenses/MIT>)

 at your option.
 */

/// Core module: cells, quoting policies and document assembly
pub mod core;

/// Error types
pub mod error;

#[doc(inline)]
pub use error::*;

#[doc(inline)]
pub use crate::core::{
    cell::Cell,
    quote::{
        QUOTERS, Quote, QuoteFn, Quoter, quote_always, quote_except_numbers, quote_frame,
        quote_minimal, quote_strict_nl, quote_when_contains, quoter_by_name,
    },
    stringify::{StringifyOptions, StringifyOptionsBuilder, stringify_make_row, to_csv},
};

/// Row-by-row writers (for example: csv writer)
pub mod item;
