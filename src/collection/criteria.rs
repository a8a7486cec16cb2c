//! Filter and sort criteria applied to the cached page of tickets.
//!
//! Both are pure: filtering is a predicate over a single ticket, sorting is a
//! total order over pairs. Neither touches the network or mutates state.

use std::cmp::Ordering;

use crate::model::Ticket;

/// Status facet of the ticket filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl StatusFilter {
    /// Cycle order used by the `f` key: all, open, closed.
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Open,
            StatusFilter::Open => StatusFilter::Closed,
            StatusFilter::Closed => StatusFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Open => "open",
            StatusFilter::Closed => "closed",
        }
    }

    fn matches(self, status: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => status,
            StatusFilter::Closed => !status,
        }
    }
}

/// Search term plus status facet.
///
/// A ticket matches when its id rendered as text contains the search term, or
/// its description contains it case-insensitively, and its status passes the
/// status facet. An empty term matches every ticket.
#[derive(Clone, Debug, Default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub status: StatusFilter,
}

impl FilterCriteria {
    pub fn matches(&self, ticket: &Ticket) -> bool {
        let matches_id = ticket.id.to_string().contains(&self.search_term);
        let matches_description = ticket
            .description
            .to_lowercase()
            .contains(&self.search_term.to_lowercase());
        (matches_id || matches_description) && self.status.matches(ticket.status)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Sort applied to the filtered rows.
///
/// `Unsorted` passes rows through in page order. The other variants compare
/// by creation date or by status; equal keys keep their relative page order
/// because the caller uses a stable sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortSpec {
    #[default]
    Unsorted,
    Date(SortDirection),
    Status(SortDirection),
}

impl SortSpec {
    pub fn compare(self, a: &Ticket, b: &Ticket) -> Ordering {
        match self {
            SortSpec::Unsorted => Ordering::Equal,
            SortSpec::Date(direction) => direction.apply(a.date.cmp(&b.date)),
            // Open sorts before closed when ascending.
            SortSpec::Status(direction) => direction.apply(b.status.cmp(&a.status)),
        }
    }

    /// Cycle order used by the `s` key.
    pub fn cycle(self) -> Self {
        match self {
            SortSpec::Unsorted => SortSpec::Date(SortDirection::Ascending),
            SortSpec::Date(SortDirection::Ascending) => SortSpec::Date(SortDirection::Descending),
            SortSpec::Date(SortDirection::Descending) => SortSpec::Status(SortDirection::Ascending),
            SortSpec::Status(SortDirection::Ascending) => SortSpec::Status(SortDirection::Descending),
            SortSpec::Status(SortDirection::Descending) => SortSpec::Unsorted,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortSpec::Unsorted => "none",
            SortSpec::Date(SortDirection::Ascending) => "date ↑",
            SortSpec::Date(SortDirection::Descending) => "date ↓",
            SortSpec::Status(SortDirection::Ascending) => "open first",
            SortSpec::Status(SortDirection::Descending) => "closed first",
        }
    }
}
