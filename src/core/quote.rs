//! Cell quoting policies.
//!
//! A policy maps the textual form of one cell to the text written in the document.
//! Every policy is built on [`quote_frame`], which wraps a cell in double quotes and
//! doubles the double quotes it contains. Policies differ only in *when* they frame.
//!
//! | Name             | Frames the cell when it contains                          |
//! |------------------|-----------------------------------------------------------|
//! | `always`         | anything, including the empty string                      |
//! | `minimal`        | `\r`, `\n`, `,` or `"`                                    |
//! | `strict_nl`      | `\r\n`, `,` or `"` (a lone `\r` or `\n` is left alone)    |
//! | `except_numbers` | any character outside `0-9 . + -`                         |
//!
//! `strict_nl` is correct under a strict reading of RFC-4180, but few parsers handle
//! unquoted bare line breaks, so it should only feed consumers known to accept them.

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::CsvError;

/// Signature shared by the named quoting policies.
pub type QuoteFn = for<'a> fn(&'a str) -> Cow<'a, str>;

/// Named policies, for selection by name at run time.
pub const QUOTERS: [(&str, QuoteFn); 4] = [
    ("minimal", quote_minimal),
    ("always", quote_always),
    ("except_numbers", quote_except_numbers),
    ("strict_nl", quote_strict_nl),
];

const MINIMAL_TRIGGERS: [&str; 4] = ["\r", "\n", ",", "\""];

const STRICT_NL_TRIGGERS: [&str; 3] = ["\r\n", ",", "\""];

/// Wraps `cell` in double quotes, doubling every double quote inside it.
///
/// ```
/// use csv_4180::core::quote::quote_frame;
///
/// assert_eq!(quote_frame("a\"b"), "\"a\"\"b\"");
/// assert_eq!(quote_frame(""), "\"\"");
/// ```
pub fn quote_frame(cell: &str) -> String {
    let mut framed = String::with_capacity(cell.len() + 2);
    framed.push('"');
    framed.push_str(&cell.replace('"', "\"\""));
    framed.push('"');
    framed
}

/// Frames `cell` when it contains any of `triggers`, otherwise returns it unchanged.
pub fn quote_when_contains<'a>(cell: &'a str, triggers: &[&str]) -> Cow<'a, str> {
    if triggers.iter().any(|trigger| cell.contains(trigger)) {
        Cow::Owned(quote_frame(cell))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Frames every cell.
pub fn quote_always(cell: &str) -> Cow<'_, str> {
    Cow::Owned(quote_frame(cell))
}

/// Frames only the cells which need it: those containing `\r`, `\n`, `,` or `"`.
pub fn quote_minimal(cell: &str) -> Cow<'_, str> {
    quote_when_contains(cell, &MINIMAL_TRIGGERS)
}

/// Frames cells containing `\r\n`, `,` or `"`. Lone carriage returns and line feeds
/// pass through unquoted.
pub fn quote_strict_nl(cell: &str) -> Cow<'_, str> {
    quote_when_contains(cell, &STRICT_NL_TRIGGERS)
}

/// Frames cells which do not look like numbers, i.e. which contain anything other than
/// ASCII digits, `.`, `+` and `-`. The empty string counts as a number.
pub fn quote_except_numbers(cell: &str) -> Cow<'_, str> {
    if cell.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-')) {
        Cow::Borrowed(cell)
    } else {
        Cow::Owned(quote_frame(cell))
    }
}

/// Looks a policy up in [`QUOTERS`].
pub fn quoter_by_name(name: &str) -> Option<QuoteFn> {
    QUOTERS
        .iter()
        .find(|(quoter_name, _)| *quoter_name == name)
        .map(|(_, quoter)| *quoter)
}

/// Anything able to quote a cell.
///
/// Implemented by [`Quoter`] and by plain functions, so custom policies can be passed
/// wherever a named one is accepted:
///
/// ```
/// use std::borrow::Cow;
/// use csv_4180::core::{quote::quote_frame, stringify::stringify_make_row};
///
/// fn quote_spaces(cell: &str) -> Cow<'_, str> {
///     if cell.contains(' ') { Cow::Owned(quote_frame(cell)) } else { Cow::Borrowed(cell) }
/// }
///
/// assert_eq!(stringify_make_row(&["a b", "c"], &quote_spaces, ";"), "\"a b\";c");
/// ```
pub trait Quote {
    fn quote<'a>(&self, cell: &'a str) -> Cow<'a, str>;
}

impl<F> Quote for F
where
    F: for<'a> Fn(&'a str) -> Cow<'a, str>,
{
    fn quote<'a>(&self, cell: &'a str) -> Cow<'a, str> {
        self(cell)
    }
}

/// The named quoting policies as a closed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quoter {
    #[default]
    Minimal,
    Always,
    StrictNl,
    ExceptNumbers,
}

impl Quoter {
    pub const ALL: [Quoter; 4] = [
        Quoter::Minimal,
        Quoter::Always,
        Quoter::ExceptNumbers,
        Quoter::StrictNl,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Quoter::Minimal => "minimal",
            Quoter::Always => "always",
            Quoter::StrictNl => "strict_nl",
            Quoter::ExceptNumbers => "except_numbers",
        }
    }

    pub fn as_fn(&self) -> QuoteFn {
        match self {
            Quoter::Minimal => quote_minimal,
            Quoter::Always => quote_always,
            Quoter::StrictNl => quote_strict_nl,
            Quoter::ExceptNumbers => quote_except_numbers,
        }
    }
}

impl Quote for Quoter {
    fn quote<'a>(&self, cell: &'a str) -> Cow<'a, str> {
        (self.as_fn())(cell)
    }
}

impl fmt::Display for Quoter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Quoter {
    type Err = CsvError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Quoter::ALL
            .into_iter()
            .find(|quoter| quoter.name() == name)
            .ok_or_else(|| CsvError::UnknownQuoter(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_should_double_embedded_quotes() {
        assert_eq!(quote_frame("abc"), "\"abc\"");
        assert_eq!(quote_frame("\""), "\"\"\"\"");
        assert_eq!(quote_frame("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote_frame("\r\n"), "\"\r\n\"");
    }

    #[test]
    fn when_contains_should_frame_on_any_trigger() {
        assert_eq!(quote_when_contains("a;b", &[";", "|"]), "\"a;b\"");
        assert_eq!(quote_when_contains("a|b", &[";", "|"]), "\"a|b\"");
        assert_eq!(quote_when_contains("a,b", &[";", "|"]), "a,b");
        assert_eq!(quote_when_contains("anything", &[]), "anything");
    }

    #[test]
    fn when_contains_should_borrow_untouched_cells() {
        assert!(matches!(quote_when_contains("plain", &[","]), Cow::Borrowed("plain")));
    }

    #[test]
    fn always_should_frame_everything() {
        assert_eq!(quote_always(""), "\"\"");
        assert_eq!(quote_always("1"), "\"1\"");
        assert_eq!(quote_always("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn minimal_should_leave_plain_cells_alone() {
        for cell in ["", "abc", "1.5", "a b", "tab\there", "semi;colon", "ünïcödé"] {
            assert_eq!(quote_minimal(cell), cell);
        }
    }

    #[test]
    fn minimal_should_frame_special_characters() {
        assert_eq!(quote_minimal("a,b"), "\"a,b\"");
        assert_eq!(quote_minimal("a\"b"), "\"a\"\"b\"");
        assert_eq!(quote_minimal("a\rb"), "\"a\rb\"");
        assert_eq!(quote_minimal("a\nb"), "\"a\nb\"");
        assert_eq!(quote_minimal("a\r\nb"), "\"a\r\nb\"");
    }

    #[test]
    fn strict_nl_should_ignore_lone_line_breaks() {
        assert_eq!(quote_strict_nl("a\r\nb"), "\"a\r\nb\"");
        assert_eq!(quote_strict_nl("a\rb"), "a\rb");
        assert_eq!(quote_strict_nl("a\nb"), "a\nb");
        assert_eq!(quote_strict_nl("a\n\rb"), "a\n\rb");
        assert_eq!(quote_strict_nl("a,b"), "\"a,b\"");
        assert_eq!(quote_strict_nl("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn except_numbers_should_only_leave_numbers_alone() {
        assert_eq!(quote_except_numbers("123.45"), "123.45");
        assert_eq!(quote_except_numbers("-1"), "-1");
        assert_eq!(quote_except_numbers("+1.5"), "+1.5");
        assert_eq!(quote_except_numbers("1..2--"), "1..2--");
        assert_eq!(quote_except_numbers(""), "");
        assert_eq!(quote_except_numbers("1,234"), "\"1,234\"");
        assert_eq!(quote_except_numbers("1e5"), "\"1e5\"");
        assert_eq!(quote_except_numbers(" 1"), "\" 1\"");
        assert_eq!(quote_except_numbers("abc"), "\"abc\"");
    }

    #[test]
    fn except_numbers_should_reject_non_ascii_digits() {
        assert_eq!(quote_except_numbers("١٢٣"), "\"١٢٣\"");
    }

    #[test]
    fn quoters_should_be_found_by_name() {
        for (name, quoter) in QUOTERS {
            let found = quoter_by_name(name).unwrap();
            assert_eq!(found("a,b"), quoter("a,b"));
            assert_eq!(found("plain"), quoter("plain"));
        }
        assert!(quoter_by_name("never").is_none());
    }

    #[test]
    fn quoter_enum_should_match_the_table() {
        for quoter in Quoter::ALL {
            let from_table = quoter_by_name(quoter.name()).unwrap();
            for cell in ["", "12", "a\rb", "a\r\nb", "x,y", "q\"q"] {
                assert_eq!(quoter.quote(cell), from_table(cell), "{quoter} on {cell:?}");
            }
        }
    }

    #[test]
    fn quoter_should_parse_from_name() {
        assert_eq!("strict_nl".parse::<Quoter>(), Ok(Quoter::StrictNl));
        assert_eq!("except_numbers".parse::<Quoter>(), Ok(Quoter::ExceptNumbers));
        assert_eq!(
            "Minimal".parse::<Quoter>(),
            Err(CsvError::UnknownQuoter("Minimal".to_string()))
        );
        assert_eq!(Quoter::default(), Quoter::Minimal);
    }

    #[test]
    fn quoter_should_serialize_as_its_name() {
        let json = serde_json::to_string(&Quoter::ExceptNumbers).unwrap();
        assert_eq!(json, "\"except_numbers\"");

        let quoter: Quoter = serde_json::from_str("\"always\"").unwrap();
        assert_eq!(quoter, Quoter::Always);
    }
}
