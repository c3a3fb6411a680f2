// shared trace plumbing
pub mod report;
pub mod signs;

// traced algorithms
pub mod bisection;
pub mod false_position;
