use crate::cost::Cost;
use crate::space::Action;
use crate::space::Space;
use crate::space::State;

/// A single-start single-goal problem over a Space.
pub trait Problem<Sp, St, A, C>: std::fmt::Debug
where
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    fn space(&self) -> &Sp;
    fn start(&self) -> St;
    fn goal(&self) -> St;

    fn is_goal(&self, s: &St) -> bool {
        *s == self.goal()
    }
}

/// An instance-specific heuristic.
pub trait ProblemHeuristic<P, Sp, St, A, C>: std::fmt::Debug
where
    P: Problem<Sp, St, A, C>,
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    fn h(_p: &P, _s: &St) -> C {
        C::zero()
    }
}

/// The blind heuristic.
#[derive(Debug)]
pub struct ZeroHeuristic;

impl<P, Sp, St, A, C> ProblemHeuristic<P, Sp, St, A, C> for ZeroHeuristic
where
    P: Problem<Sp, St, A, C>,
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
}
