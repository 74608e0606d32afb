//! Best-first search driven by an evolving score.

use std::collections::BinaryHeap;
use std::marker::PhantomData;

use derive_more::Display;
use log::debug;
use log::info;
use log::warn;

use crate::cost::Cost;
use crate::problem::Problem;
use crate::problem::ProblemHeuristic;
use crate::search::SearchRecord;
use crate::search::SearchRecords;
use crate::space::Action;
use crate::space::Path;
use crate::space::Space;
use crate::space::State;

/// How the priority of a newly reached state is computed.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq)]
pub enum ScoreRule {
    /// `score(n) = score(popped) + cost + h(n)`.
    ///
    /// The popped score already carries the heuristic of every ancestor, so
    /// heuristic terms accumulate along the path. States are re-expanded
    /// whenever they are popped, stale or not, and improvement is judged on
    /// the score itself.
    #[default]
    #[display("compounding")]
    Compounding,
    /// Textbook A*: `f(n) = g(n) + h(n)` with `g` tracked on its own.
    ///
    /// Improvement is judged on `g`, and stale heap entries are dropped when
    /// popped.
    #[display("additive")]
    Additive,
}

/// Optional bounds on a single search run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Give up after popping this many heap entries.
    pub max_pops: Option<usize>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Heap entries popped, including stale ones.
    pub pops: usize,
    /// Heap entries pushed, including the start.
    pub pushes: usize,
    /// States expanded. Counts re-expansions.
    pub expansions: usize,
    /// Stale entries dropped (only with [`ScoreRule::Additive`]).
    pub stale: usize,
}

/// The result of a search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    Found(Path<St, A, C>),
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// [`SearchLimits::max_pops`] was hit.
    LimitReached,
}

impl<St, A, C> Outcome<St, A, C>
where
    St: State,
    A: Action,
    C: Cost,
{
    /// The final score, or the infinite sentinel when no path was found.
    pub fn score(&self) -> C {
        match self {
            Outcome::Found(p) => p.cost(),
            Outcome::Exhausted | Outcome::LimitReached => C::max_value(),
        }
    }

    pub fn path(&self) -> Option<&Path<St, A, C>> {
        match self {
            Outcome::Found(p) => Some(p),
            Outcome::Exhausted | Outcome::LimitReached => None,
        }
    }

    pub fn into_path(self) -> Option<Path<St, A, C>> {
        match self {
            Outcome::Found(p) => Some(p),
            Outcome::Exhausted | Outcome::LimitReached => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

/// A `(score, state)` heap entry.
///
/// Ordered on score alone and reversed, so `BinaryHeap` pops the lowest score
/// first. Ties come out in no particular order.
#[derive(Copy, Clone, Debug)]
struct BestFirstHeapNode<St, C>
where
    St: State,
    C: Cost,
{
    score: C,
    state: St,
}

impl<St: State, C: Cost> PartialEq for BestFirstHeapNode<St, C> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.score.eq(&other.score)
    }
}
impl<St: State, C: Cost> Eq for BestFirstHeapNode<St, C> {}

impl<St: State, C: Cost> PartialOrd for BestFirstHeapNode<St, C> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<St: State, C: Cost> Ord for BestFirstHeapNode<St, C> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.score.cmp(&self.score)
    }
}

#[derive(Debug)]
pub struct BestFirstSearch<'p, H, P, Sp, St, A, C>
where
    H: ProblemHeuristic<P, Sp, St, A, C>,
    P: Problem<Sp, St, A, C>,
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    problem: &'p P,
    rule: ScoreRule,
    limits: SearchLimits,

    /// The frontier. A state may have several entries, only one of them
    /// matching its record.
    open: BinaryHeap<BestFirstHeapNode<St, C>>,

    /// Best known score, cost and parent for every state seen so far. Doubles
    /// as the decrease-key replacement: a state is only pushed again when its
    /// record improves.
    records: SearchRecords<St, A, C>,

    stats: SearchStats,

    _phantom_heuristic: PhantomData<H>,
    _phantom_space: PhantomData<Sp>,
}

impl<'p, H, P, Sp, St, A, C> BestFirstSearch<'p, H, P, Sp, St, A, C>
where
    H: ProblemHeuristic<P, Sp, St, A, C>,
    P: Problem<Sp, St, A, C>,
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    #[must_use]
    pub fn new(problem: &'p P) -> Self {
        let start = problem.start();
        let mut search = Self {
            problem,
            rule: ScoreRule::default(),
            limits: SearchLimits::default(),
            open: BinaryHeap::with_capacity(256),
            records: SearchRecords::new(start),
            stats: SearchStats::default(),
            _phantom_heuristic: PhantomData,
            _phantom_space: PhantomData,
        };
        search.push(C::zero(), start);
        search
    }

    #[must_use]
    pub fn with_rule(mut self, rule: ScoreRule) -> Self {
        self.rule = rule;
        self
    }

    #[must_use]
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn rule(&self) -> ScoreRule {
        self.rule
    }
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// What the search currently knows about `s`.
    pub fn record(&self, s: &St) -> Option<&SearchRecord<St, A, C>> {
        self.records.get(s)
    }

    /// Runs until the goal is popped, the frontier empties or a limit hits.
    pub fn find_path(&mut self) -> Outcome<St, A, C> {
        loop {
            if self
                .limits
                .max_pops
                .is_some_and(|max_pops| self.stats.pops >= max_pops)
            {
                warn!(
                    "Gave up after {} pops ({} entries still open)",
                    self.stats.pops,
                    self.open.len()
                );
                return Outcome::LimitReached;
            }

            let Some(BestFirstHeapNode { score, state }) = self.open.pop() else {
                break;
            };
            self.stats.pops += 1;

            if self.rule == ScoreRule::Additive && score > self.records.score(&state) {
                self.stats.stale += 1;
                continue;
            }

            if self.problem.is_goal(&state) {
                let path = self.records.path(state, score);
                info!(
                    "Reached {state:?} with score {score} after {} pops ({} moves)",
                    self.stats.pops,
                    path.len()
                );
                return Outcome::Found(path);
            }

            self.expand(state, score);
            self.verify();
        }

        info!(
            "Exhausted the frontier after {} pops without reaching {:?}",
            self.stats.pops,
            self.problem.goal()
        );
        Outcome::Exhausted
    }

    fn expand(&mut self, state: St, score: C) {
        self.stats.expansions += 1;
        let problem = self.problem;
        let space = problem.space();
        let g = self.records.g(&state);

        for (n, a) in space.neighbours(&state) {
            let c: C = space.cost(&state, &a);
            debug_assert!(c != C::zero());
            let h: C = H::h(problem, &n);
            let n_g = g.saturating_add(&c);

            let improved = match self.rule {
                ScoreRule::Compounding => {
                    let candidate = score.saturating_add(&c).saturating_add(&h);
                    (candidate < self.records.score(&n)).then_some(candidate)
                }
                ScoreRule::Additive => {
                    (n_g < self.records.g(&n)).then(|| n_g.saturating_add(&h))
                }
            };

            if let Some(n_score) = improved {
                debug!("{state:?} -{a:?}-> {n:?} (c={c}, h={h}, score={n_score})");
                self.records.reach(n, (state, a), n_g, n_score);
                self.push(n_score, n);
            }
        }
    }

    #[inline(always)]
    fn push(&mut self, score: C, state: St) {
        self.stats.pushes += 1;
        self.open.push(BestFirstHeapNode { score, state });
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    fn verify(&self) {}
    #[inline(always)]
    #[cfg(feature = "verify")]
    fn verify(&self) {
        self.records.verify();
        // Every open entry is at least as bad as its state's record.
        for e in &self.open {
            debug_assert!(self.records.score(&e.state) <= e.score);
        }
    }

    pub fn write_stats<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        use thousands::Separable;

        writeln!(out, "BestFirstSearch Stats ({}):", self.rule)?;
        writeln!(out, "  - Pops:       {}", self.stats.pops.separate_with_commas())?;
        writeln!(out, "  - Pushes:     {}", self.stats.pushes.separate_with_commas())?;
        writeln!(
            out,
            "  - Expansions: {}",
            self.stats.expansions.separate_with_commas()
        )?;
        writeln!(out, "  - Stale:      {}", self.stats.stale.separate_with_commas())?;
        writeln!(out, "  - |Records|:  {}", self.records.len().separate_with_commas())?;
        writeln!(out, "  - |Open|:     {}", self.open.len().separate_with_commas())?;
        Ok(())
    }
}

/// Searches `problem` from its start to its goal.
pub fn solve<H, P, Sp, St, A, C>(problem: &P, rule: ScoreRule) -> Outcome<St, A, C>
where
    H: ProblemHeuristic<P, Sp, St, A, C>,
    P: Problem<Sp, St, A, C>,
    Sp: Space<St, A, C>,
    St: State,
    A: Action,
    C: Cost,
{
    BestFirstSearch::<H, P, Sp, St, A, C>::new(problem)
        .with_rule(rule)
        .find_path()
}
