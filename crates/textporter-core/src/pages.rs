use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;

use crate::error::TextporterError;

/// Highest page number accepted in a selection.
pub const MAX_PAGE_NUMBER: i64 = 100_000;

/// A user-supplied page selection. Page numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSelection {
    Single(i64),
    /// Inclusive on both ends.
    Interval(i64, i64),
    Explicit(Vec<i64>),
    /// Text such as `"5"`, `"1-5"`, `"1,3,5"` or `"1-3,7"`.
    Text(String),
}

impl PageSelection {
    /// Resolve into sorted, deduplicated page numbers.
    pub fn resolve(&self) -> Result<Vec<usize>, TextporterError> {
        resolve(self)
    }
}

impl fmt::Display for PageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSelection::Single(n) => write!(f, "{n}"),
            PageSelection::Interval(a, b) => write!(f, "{a}-{b}"),
            PageSelection::Explicit(pages) => {
                let parts: Vec<String> = pages.iter().map(|p| p.to_string()).collect();
                write!(f, "{}", parts.join(","))
            }
            PageSelection::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for PageSelection {
    fn from(s: &str) -> Self {
        PageSelection::Text(s.to_string())
    }
}

impl TryFrom<&Value> for PageSelection {
    type Error = TextporterError;

    /// Numbers, strings, integer arrays and `{"start", "end"}` objects.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map(PageSelection::Single)
                .ok_or_else(|| unsupported_json("non-integer number", value)),
            Value::String(s) => Ok(PageSelection::Text(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_i64()
                        .ok_or_else(|| unsupported_json(json_type_name(item), item))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(PageSelection::Explicit),
            Value::Object(map) => match (
                map.get("start").and_then(Value::as_i64),
                map.get("end").and_then(Value::as_i64),
            ) {
                (Some(start), Some(end)) if map.len() == 2 => {
                    Ok(PageSelection::Interval(start, end))
                }
                _ => Err(unsupported_json("object", value)),
            },
            other => Err(unsupported_json(json_type_name(other), other)),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn unsupported_json(kind: &str, value: &Value) -> TextporterError {
    TextporterError::UnsupportedPageSelection(format!("{kind} ({value}) is not a page selection"))
}

/// Resolve a selection into sorted, deduplicated page numbers.
pub fn resolve(selection: &PageSelection) -> Result<Vec<usize>, TextporterError> {
    let mut pages = BTreeSet::new();

    match selection {
        PageSelection::Single(n) => {
            pages.insert(check_page(*n)?);
        }
        PageSelection::Interval(start, end) => insert_interval(&mut pages, *start, *end)?,
        PageSelection::Explicit(list) => {
            if list.is_empty() {
                return Err(TextporterError::UnsupportedPageSelection(
                    "empty page list".into(),
                ));
            }
            for n in list {
                pages.insert(check_page(*n)?);
            }
        }
        PageSelection::Text(text) => parse_text(text, &mut pages)?,
    }

    Ok(pages.into_iter().collect())
}

fn parse_text(text: &str, pages: &mut BTreeSet<usize>) -> Result<(), TextporterError> {
    if text.trim().is_empty() {
        return Err(TextporterError::UnsupportedPageSelection(
            "empty page selection".into(),
        ));
    }

    for token in text.split(',').map(str::trim) {
        if token.is_empty() {
            return Err(TextporterError::UnsupportedPageSelection(format!(
                "empty entry in '{text}'"
            )));
        }

        if let Ok(n) = token.parse::<i64>() {
            pages.insert(check_page(n)?);
            continue;
        }

        let bounds = token
            .split_once('-')
            .and_then(|(a, b)| Some((a.trim().parse::<i64>().ok()?, b.trim().parse::<i64>().ok()?)));
        match bounds {
            Some((start, end)) => insert_interval(pages, start, end)?,
            None => {
                return Err(TextporterError::UnsupportedPageSelection(format!(
                    "'{token}' is not a page number or range"
                )));
            }
        }
    }

    Ok(())
}

fn insert_interval(
    pages: &mut BTreeSet<usize>,
    start: i64,
    end: i64,
) -> Result<(), TextporterError> {
    if start > end {
        return Err(TextporterError::InvalidPageRange(format!(
            "range {start}-{end} starts after it ends"
        )));
    }
    let first = check_page(start)?;
    let last = check_page(end)?;
    pages.extend(first..=last);
    Ok(())
}

fn check_page(n: i64) -> Result<usize, TextporterError> {
    if n <= 0 {
        return Err(TextporterError::InvalidPageRange(format!(
            "page {n} is not a positive page number"
        )));
    }
    if n > MAX_PAGE_NUMBER {
        return Err(TextporterError::InvalidPageRange(format!(
            "page {n} exceeds the maximum of {MAX_PAGE_NUMBER}"
        )));
    }
    usize::try_from(n).map_err(|_| {
        TextporterError::InvalidPageRange(format!("page {n} is out of range"))
    })
}
