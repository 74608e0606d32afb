use std::fmt::Debug;

use rustc_hash::FxHashMap;

use crate::cost::Cost;
use crate::space::Action;
use crate::space::Path;
use crate::space::State;

/// Per-state bookkeeping: the best known score and how it was reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchRecord<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    /// Priority the state was last pushed with.
    pub score: C,
    /// Accumulated step cost along `parent`.
    pub g: C,
    pub parent: Option<(St, A)>,
}

/// Search records keyed by State.
///
/// Entries are only ever added or improved, never removed.
pub(crate) struct SearchRecords<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    records: FxHashMap<St, SearchRecord<St, A, C>>,
}

impl<St, A, C> SearchRecords<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    pub(crate) fn new(start: St) -> Self {
        let mut records = FxHashMap::default();
        records.insert(
            start,
            SearchRecord {
                score: C::zero(),
                g: C::zero(),
                parent: None,
            },
        );
        Self { records }
    }

    #[inline(always)]
    pub(crate) fn get(&self, s: &St) -> Option<&SearchRecord<St, A, C>> {
        self.records.get(s)
    }

    /// The best score so far, infinite if `s` is unseen.
    #[inline(always)]
    pub(crate) fn score(&self, s: &St) -> C {
        self.records.get(s).map_or(C::max_value(), |r| r.score)
    }

    /// The best accumulated cost so far, infinite if `s` is unseen.
    #[inline(always)]
    pub(crate) fn g(&self, s: &St) -> C {
        self.records.get(s).map_or(C::max_value(), |r| r.g)
    }

    /// Records a better way of reaching `s`.
    #[inline(always)]
    pub(crate) fn reach(&mut self, s: St, parent: (St, A), g: C, score: C) {
        self.records.insert(
            s,
            SearchRecord {
                score,
                g,
                parent: Some(parent),
            },
        );
    }

    #[inline(always)]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    /// Rebuilds the path to `end` by following parents back to the root.
    #[must_use]
    pub(crate) fn path(&self, end: St, cost: C) -> Path<St, A, C> {
        let mut path = Path::<St, A, C>::new_from_start(end);

        let mut state = end;
        while let Some(record) = self.records.get(&state) {
            let Some((parent, a)) = record.parent else {
                break;
            };
            path.append(a, parent);
            state = parent;
            // Each state shows up at most once, so parents can't cycle.
            debug_assert!(path.states().len() <= self.len());
        }

        path.reverse();
        path.with_cost(cost)
    }

    #[cfg(feature = "verify")]
    pub(crate) fn verify(&self) {
        for (s, r) in &self.records {
            if let Some((p, _a)) = r.parent {
                debug_assert!(
                    self.records.contains_key(&p),
                    "{s:?} has a parent {p:?} without a record"
                );
                debug_assert!(r.g > self.g(&p) || r.score > self.score(&p));
            }
        }
    }
}

impl<St, A, C> Debug for SearchRecords<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "SearchRecords{{({} states)}}", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    struct Cell(u32);
    impl State for Cell {}

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    struct Step;
    impl Action for Step {}

    #[test]
    fn start_is_seeded() {
        let records = SearchRecords::<Cell, Step, u32>::new(Cell(0));
        assert_eq!(records.score(&Cell(0)), 0);
        assert_eq!(records.score(&Cell(1)), u32::MAX);
        assert_eq!(records.g(&Cell(1)), u32::MAX);
        assert!(records.get(&Cell(0)).unwrap().parent.is_none());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn path_runs_from_root() {
        let mut records = SearchRecords::<Cell, Step, u32>::new(Cell(0));
        records.reach(Cell(1), (Cell(0), Step), 1, 2);
        records.reach(Cell(2), (Cell(1), Step), 2, 5);
        // A better way into Cell(2) replaces the old parent.
        records.reach(Cell(2), (Cell(0), Step), 1, 3);

        let path = records.path(Cell(2), 3);
        assert_eq!(path.states(), &[Cell(0), Cell(2)]);
        assert_eq!(path.start(), Cell(0));
        assert_eq!(path.end(), Cell(2));
        assert_eq!(path.cost(), 3);
        assert!(path.seems_valid());
    }

    #[test]
    fn path_to_root() {
        let records = SearchRecords::<Cell, Step, u32>::new(Cell(7));
        let path = records.path(Cell(7), 0);
        assert_eq!(path.states(), &[Cell(7)]);
        assert!(path.is_empty());
    }
}
