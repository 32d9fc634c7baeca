//! Sort orders for the catalog.
//!
//! All orders are stable: events that compare equal keep their input order.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::enum_display_fromstr;
use crate::error::NexEventError;
use crate::types::Event;

/// Sort key selected in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Earliest start date first; events without a parseable date go last
    #[default]
    DateAsc,
    PriceAsc,
    PriceDesc,
    /// Leave the input order untouched
    Unsorted,
}

impl SortKey {
    /// Keys offered by the sort selector, in cycling order.
    pub const SELECTABLE: [SortKey; 3] = [SortKey::DateAsc, SortKey::PriceAsc, SortKey::PriceDesc];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::DateAsc => "Date (soonest)",
            SortKey::PriceAsc => "Price (low to high)",
            SortKey::PriceDesc => "Price (high to low)",
            SortKey::Unsorted => "Feed order",
        }
    }

    /// Next selectable key, wrapping around.
    pub fn next(self) -> SortKey {
        let idx = Self::SELECTABLE.iter().position(|k| *k == self);
        match idx {
            Some(i) => Self::SELECTABLE[(i + 1) % Self::SELECTABLE.len()],
            None => Self::SELECTABLE[0],
        }
    }

    /// Previous selectable key, wrapping around.
    pub fn prev(self) -> SortKey {
        let len = Self::SELECTABLE.len();
        let idx = Self::SELECTABLE.iter().position(|k| *k == self);
        match idx {
            Some(i) => Self::SELECTABLE[(i + len - 1) % len],
            None => Self::SELECTABLE[len - 1],
        }
    }
}

enum_display_fromstr!(SortKey, NexEventError::InvalidSortKey, {
    DateAsc => "date-asc",
    PriceAsc => "price-asc",
    PriceDesc => "price-desc",
    Unsorted => "none",
});

fn compare_start(a: &Event, b: &Event) -> Ordering {
    match (a.start(), b.start()) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort events in place by the given key.
pub fn sort_events<E: Borrow<Event>>(events: &mut [E], key: SortKey) {
    match key {
        SortKey::DateAsc => events.sort_by(|a, b| compare_start(a.borrow(), b.borrow())),
        SortKey::PriceAsc => events.sort_by(|a, b| a.borrow().price.total_cmp(&b.borrow().price)),
        SortKey::PriceDesc => events.sort_by(|a, b| b.borrow().price.total_cmp(&a.borrow().price)),
        SortKey::Unsorted => {}
    }
}
