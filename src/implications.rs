//! Crate `implications` owns the per-literal growable arrays of implied
//! literals. Storage lives here, outside `State`; `State` only carries the
//! per-literal length ("stack pointer") into these arrays, so cloning a
//! search node never touches this arena. A [`Solver`](crate::solver::Solver)
//! clones the whole arena when forking for depth-1 parallelism, since each
//! worker appends independently from that point on.
use crate::types::{Literal, NUM_LITERALS};

#[derive(Clone, Debug)]
pub struct ImplicationStore {
    lists: Vec<Vec<Literal>>,
}

impl ImplicationStore {
    pub fn new() -> ImplicationStore {
        ImplicationStore {
            lists: vec![Vec::new(); NUM_LITERALS],
        }
    }

    /// Active implications of `literal` given the current per-state length.
    pub fn get(&self, literal: Literal, len: u16) -> &[Literal] {
        &self.lists[literal as usize][..len as usize]
    }

    /// Appends `to` to `from`'s list at position `len`, overwriting stale
    /// entries left by a sibling branch rather than growing unboundedly.
    pub fn push(&mut self, from: Literal, len: u16, to: Literal) {
        let slot = &mut self.lists[from as usize];
        let idx = len as usize;
        if idx < slot.len() {
            slot[idx] = to;
        } else {
            debug_assert_eq!(idx, slot.len());
            slot.push(to);
        }
    }
}

impl Default for ImplicationStore {
    fn default() -> ImplicationStore {
        ImplicationStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::literal;

    #[test]
    fn push_then_get_round_trips() {
        let mut store = ImplicationStore::new();
        let from = literal(0, 0, 0);
        let to = literal(0, 1, 0);
        store.push(from, 0, to);
        assert_eq!(store.get(from, 1), &[to]);
    }

    #[test]
    fn push_overwrites_stale_entries_at_or_past_len() {
        let mut store = ImplicationStore::new();
        let from = literal(0, 0, 0);
        let a = literal(0, 1, 0);
        let b = literal(0, 2, 0);
        let c = literal(0, 3, 0);
        store.push(from, 0, a);
        store.push(from, 1, b);
        assert_eq!(store.get(from, 2), &[a, b]);
        // unwind to length 1, then push something else: should overwrite `b`.
        store.push(from, 1, c);
        assert_eq!(store.get(from, 2), &[a, c]);
    }
}
