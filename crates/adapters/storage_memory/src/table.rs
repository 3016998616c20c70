//! Shared table shape for the in-memory repositories.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Rows in insertion order plus the id counter for the next insert.
///
/// The counter only ever increments, so identifiers are 1..N with no gaps
/// and are never reused after a delete.
pub(crate) struct Table<E> {
    pub(crate) rows: Vec<E>,
    counter: i64,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            counter: 0,
        }
    }
}

impl<E> Table<E> {
    /// Claim the next identifier.
    pub(crate) fn next_id(&mut self) -> i64 {
        self.counter += 1;
        self.counter
    }
}

/// Lock a table, recovering the data if a previous holder panicked.
pub(crate) fn lock<E>(table: &Mutex<Table<E>>) -> MutexGuard<'_, Table<E>> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_hand_out_sequential_ids_starting_at_one() {
        let mut table: Table<()> = Table::default();
        assert_eq!(table.next_id(), 1);
        assert_eq!(table.next_id(), 2);
        assert_eq!(table.next_id(), 3);
    }
}
