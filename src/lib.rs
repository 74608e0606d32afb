use shadow_rs::shadow;

shadow!(build);

// Search space and problems
// -------------------------
pub mod cost;
pub mod float_cost;
pub mod problem;
pub mod search;
pub mod space;

// Problems
// --------
pub mod problems;

// Algorithms
// ----------
pub mod algorithms;
