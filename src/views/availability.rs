//! Order-preserving split of books or stories by availability.

use crate::content::Availability;

/// Items with resources and items without, each in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    pub available: Vec<T>,
    pub unavailable: Vec<T>,
}

impl<T> Partition<T> {
    /// Total items across both sides
    pub fn len(&self) -> usize {
        self.available.len() + self.unavailable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty() && self.unavailable.is_empty()
    }
}

/// Split `items` into available and unavailable. This is a partition, not a
/// sort: every item lands on exactly one side and relative order is kept.
pub fn partition_available<T, I>(items: I) -> Partition<T>
where
    I: IntoIterator<Item = T>,
    T: Availability,
{
    let (available, unavailable) = items.into_iter().partition(|item| item.is_available());
    Partition {
        available,
        unavailable,
    }
}
