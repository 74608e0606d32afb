use std::fmt::Debug;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::cost::Cost;

pub trait Action: Copy + Clone + Debug + PartialEq + Eq {}
pub trait State: Copy + Clone + Debug + PartialEq + Eq + Hash {}

/// Upper bound on neighbours kept inline before spilling to the heap.
pub const INLINE_NEIGHBOURS: usize = 8;
pub type Neighbours<St, A> = SmallVec<[(St, A); INLINE_NEIGHBOURS]>;

/// A sequence of states joined by actions, plus the score it was found with.
///
/// ```pseudocode
/// assert_eq!(path.states().len(), path.actions().len() + 1)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<S, A, C>
where
    S: State,
    A: Action,
    C: Cost,
{
    states: Vec<S>,
    actions: Vec<A>,
    cost: C,
}

impl<S, A, C> Path<S, A, C>
where
    S: State,
    A: Action,
    C: Cost,
{
    #[inline(always)]
    pub fn new_from_start(start: S) -> Self {
        Self {
            states: vec![start],
            actions: vec![],
            cost: C::zero(),
        }
    }

    #[inline(always)]
    pub fn append(&mut self, a: A, s: S) {
        self.actions.push(a);
        self.states.push(s);
    }

    /// Reverses a Path built from its end.
    ///
    /// Useful when naturally reconstructing paths in reverse.
    pub fn reverse(&mut self) {
        self.states.reverse();
        self.actions.reverse();
    }

    pub fn with_cost(mut self, cost: C) -> Self {
        self.cost = cost;
        self
    }

    #[inline(always)]
    pub fn start(&self) -> S {
        self.states[0]
    }
    #[inline(always)]
    pub fn end(&self) -> S {
        self.states[self.states.len() - 1]
    }
    pub fn states(&self) -> &[S] {
        &self.states
    }
    pub fn actions(&self) -> &[A] {
        &self.actions
    }
    /// The score the search reported for this path.
    pub fn cost(&self) -> C {
        self.cost
    }

    /// Number of moves.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Runs sanity checks
    #[inline(always)]
    pub fn seems_valid(&self) -> bool {
        self.states.len() == self.actions.len() + 1 && self.cost.valid()
    }
}

impl<S, A, C> std::fmt::Display for Path<S, A, C>
where
    S: State,
    A: Action,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Path({}, {:?}:{:?}:{:?})",
            self.cost,
            self.start(),
            self.actions.iter().take(20).collect::<Vec<_>>(),
            self.end()
        )
    }
}

pub trait Space<St, A, C>: Debug
where
    St: State,
    A: Action,
    C: Cost,
{
    /// Applies an action, returning `None` when the move is not allowed.
    fn apply(&self, s: &St, a: &A) -> Option<St>;

    fn cost(&self, s: &St, a: &A) -> C;

    /// Expands a State into every valid `(State, Action)` pair.
    ///
    /// The order is fixed for a given space.
    fn neighbours(&self, s: &St) -> Neighbours<St, A>;

    /// Verify is a State is valid.
    fn valid(&self, s: &St) -> bool;

    /// Replays the actions of a path, checking each intermediate state.
    fn valid_path(&self, p: &Path<St, A, C>) -> bool {
        if !self.valid(&p.start()) {
            return false;
        }
        let mut state = p.start();
        for (a, expected) in p.actions().iter().zip(&p.states()[1..]) {
            match self.apply(&state, a) {
                Some(s) if s == *expected => state = s,
                _ => return false,
            }
        }
        p.states().len() == p.actions().len() + 1
    }

    /// Sum of the step costs along a path.
    ///
    /// This can differ from [`Path::cost`], which holds the search score.
    fn path_cost(&self, p: &Path<St, A, C>) -> C {
        let mut c = C::zero();
        for (s, a) in p.states().iter().zip(p.actions()) {
            c = c.saturating_add(&self.cost(s, a));
        }
        c
    }
}
