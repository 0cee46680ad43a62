//! Reference string input.

use std::fs;
use std::path::Path;

use log::debug;

use crate::common::{Error, PageId, Result};

/// Parse a textual reference string.
///
/// Pages are non-negative integers separated by whitespace and/or commas.
/// Blank input yields an empty reference string.
///
/// # Errors
/// - `Error::InvalidPageToken` for the first token that is not a page
///
/// # Example
/// ```
/// use pagesim::{pages, report::parse_reference_string};
///
/// let parsed = parse_reference_string("7, 0 1,2\n0").unwrap();
/// assert_eq!(parsed, pages(&[7, 0, 1, 2, 0]));
/// ```
pub fn parse_reference_string(text: &str) -> Result<Vec<PageId>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse::<PageId>)
        .collect()
}

/// Read and parse a reference string file.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::InvalidPageToken` if its contents do not parse
pub fn read_reference_string<P: AsRef<Path>>(path: P) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let pages = parse_reference_string(&content)?;
    debug!("read {} page requests from {}", pages.len(), path.display());
    Ok(pages)
}

/// Pick the reference string from inline tokens or a file.
///
/// A file wins when given; an empty file is a valid empty reference
/// string. Inline tokens are joined and parsed like file contents.
///
/// # Errors
/// - `Error::MissingReferenceString` if there are no tokens and no file
/// - any error from [`read_reference_string`] / [`parse_reference_string`]
pub fn resolve_reference_string<S, P>(tokens: &[S], file: Option<P>) -> Result<Vec<PageId>>
where
    S: AsRef<str>,
    P: AsRef<Path>,
{
    match file {
        Some(path) => read_reference_string(path),
        None if tokens.is_empty() => Err(Error::MissingReferenceString),
        None => {
            let joined: Vec<&str> = tokens.iter().map(AsRef::<str>::as_ref).collect();
            parse_reference_string(&joined.join(" "))
        }
    }
}
