use std::fmt::Debug;

use derive_more::Display;
use num_traits::SaturatingAdd;
use num_traits::Zero;
use num_traits::bounds::UpperBounded;
use ordered_float::FloatCore;
use ordered_float::OrderedFloat;

use crate::cost::Cost;

/// A floating point score with a total order.
///
/// Positive infinity is the "no path" sentinel.
#[derive(Copy, Clone, Default, Debug, Display)]
#[repr(transparent)]
#[display("{_0}")]
pub struct FloatCost<F: FloatCore>(pub OrderedFloat<F>);

impl<F> Cost for FloatCost<F> where F: FloatCore + Debug + std::fmt::Display {}

impl<F> FloatCost<F>
where
    F: FloatCore,
{
    pub fn new(f: F) -> Self {
        Self(OrderedFloat(f))
    }

    #[inline(always)]
    pub fn get(&self) -> F {
        self.0.into_inner()
    }

    #[inline(always)]
    pub fn infinity() -> Self {
        Self::new(F::infinity())
    }

    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.get().is_finite()
    }
}

impl<F: FloatCore> From<F> for FloatCost<F> {
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl<F: FloatCore> std::ops::Add for FloatCost<F> {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<F: FloatCore> std::ops::AddAssign for FloatCost<F> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0 + rhs.0;
    }
}

// Float addition already saturates at infinity.
impl<F: FloatCore> SaturatingAdd for FloatCost<F> {
    #[inline(always)]
    fn saturating_add(&self, rhs: &Self) -> Self {
        *self + *rhs
    }
}

impl<F: FloatCore> Zero for FloatCost<F> {
    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.0 == OrderedFloat(F::zero())
    }
    #[inline(always)]
    fn zero() -> Self {
        Self::new(F::zero())
    }
}

impl<F: FloatCore> UpperBounded for FloatCost<F> {
    #[inline(always)]
    fn max_value() -> Self {
        Self::infinity()
    }
}

impl<F: FloatCore> PartialEq for FloatCost<F> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}
impl<F: FloatCore> Eq for FloatCost<F> {}

impl<F: FloatCore> PartialOrd for FloatCost<F> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl<F: FloatCore> Ord for FloatCost<F> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}
