//! Source of every uniform pick made by the board and the targeting engine.

use rand::Rng;

/// Picks an index in `0..len`. Callers never pass `len == 0`.
pub trait Chooser {
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> Chooser for R {
    fn choose_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// [`Chooser`] that always takes the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstChoice;

impl Chooser for FirstChoice {
    fn choose_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// Pick one element of `items`, or `None` if it is empty.
pub(crate) fn pick<'a, T, C: Chooser + ?Sized>(chooser: &mut C, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = chooser.choose_index(items.len());
    items.get(idx.min(items.len() - 1))
}
