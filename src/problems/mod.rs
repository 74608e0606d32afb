//! Implementation of search spaces and problems.
//!
//! These expose a generic search space so we can do pathfinding against a
//! graph-like API where from a given state we can find actions that take us to
//! new states.

pub mod campus;
