//! Page identifier type.

use std::fmt;
use std::str::FromStr;

use crate::common::Error;

/// Identifies a virtual page in a reference string.
///
/// Reference strings use small non-negative integers in practice; `u32`
/// leaves plenty of headroom while keeping snapshots compact.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id: PageId = "42".parse().unwrap();
/// assert_eq!(page_id, PageId::new(42));
/// assert_eq!(page_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate so width/alignment flags apply to the number.
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PageId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(PageId)
            .map_err(|_| Error::InvalidPageToken(s.to_string()))
    }
}

/// Build a reference string from plain integers.
///
/// Handy in tests and doc examples.
pub fn pages(ids: &[u32]) -> Vec<PageId> {
    ids.iter().copied().map(PageId).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(PageId::new(5) > PageId::new(3));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "42");
        assert_eq!(format!("{:<4}|", PageId::new(7)), "7   |");
    }

    #[test]
    fn test_page_id_parse() {
        assert_eq!(" 9 ".parse::<PageId>().unwrap(), PageId::new(9));
        assert!(matches!(
            "-1".parse::<PageId>(),
            Err(Error::InvalidPageToken(t)) if t == "-1"
        ));
        assert!("abc".parse::<PageId>().is_err());
    }

    #[test]
    fn test_pages_helper() {
        assert_eq!(pages(&[1, 2]), vec![PageId::new(1), PageId::new(2)]);
        assert!(pages(&[]).is_empty());
    }
}
