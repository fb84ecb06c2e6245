//! Cursor-based pagination reconciliation.
//!
//! Listing endpoints are queried with an overfetch of one record beyond
//! the requested page size. The presence of the extra record signals that
//! more data exists in the fetch direction; this module trims the page
//! back to the requested size and derives the boundary flags shown by the
//! document and project listings.

use thiserror::Error;

/// Pagination configuration violations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// The requested page size must be at least one record.
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),
}

/// Direction of a page fetch, relative to the cursor the caller paged
/// from. `Forward` moves toward older records, `Backward` toward newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Forward,
    Backward,
}

impl PageDirection {
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}

/// A reconciled page of records with its boundary flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Records trimmed to at most the requested page size.
    pub items: Vec<T>,
    /// Whether a page exists before this one.
    pub has_previous: bool,
    /// Whether a page exists after this one.
    pub has_next: bool,
}

/// Number of records to request from the backend for a page of
/// `page_size`: one extra record acts as the overfetch sentinel.
pub const fn fetch_size(page_size: usize) -> usize {
    page_size + 1
}

/// Trim an overfetched page and derive its boundary flags.
///
/// `items` is the record list as returned by the backend, already ordered
/// for the requested direction; the reconciler never inspects the records
/// themselves, it only slices. `previous_id` is the cursor the caller
/// paged from; `None` or an empty string means the first page. Callers
/// are expected to have requested [`fetch_size`] records, but a short
/// page is accepted and passed through untrimmed.
///
/// # Examples
///
/// ```
/// use docboard_util::pagination::{reconcile, PageDirection};
///
/// // Six records came back for a page size of five: the trailing
/// // record is the overfetch sentinel.
/// let ids = vec!["14", "13", "12", "11", "10", "9"];
/// let page = reconcile(ids, PageDirection::Backward, None, 5).unwrap();
///
/// assert_eq!(page.items, vec!["14", "13", "12", "11", "10"]);
/// assert!(page.has_next);
/// assert!(!page.has_previous);
/// ```
pub fn reconcile<T>(
    mut items: Vec<T>,
    direction: PageDirection,
    previous_id: Option<&str>,
    page_size: usize,
) -> Result<Page<T>, PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::InvalidPageSize(page_size));
    }

    let is_full = items.len() == page_size + 1;
    if is_full {
        match direction {
            // The leading record overlaps the cursor boundary.
            PageDirection::Forward => {
                items.remove(0);
            }
            // The trailing record is the sentinel.
            PageDirection::Backward => items.truncate(page_size),
        }
    }

    let has_cursor = previous_id.is_some_and(|id| !id.is_empty());
    // A short forward page still reports a next page; only a short
    // backward page is terminal. The two directions are asymmetric.
    #[allow(clippy::nonminimal_bool)]
    let has_next = is_full || (!is_full && direction.is_forward());
    let has_previous = has_cursor && (is_full || !direction.is_forward());

    Ok(Page {
        items,
        has_previous,
        has_next,
    })
}
