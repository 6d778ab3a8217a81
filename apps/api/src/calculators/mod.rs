// Client-facing financial calculators.
// Each one is a pure function of the submitted form text; nothing is cached or stored.

pub mod boot;
pub mod costs;
pub mod format;
pub mod handlers;
pub mod identification;
pub mod outcome;
pub mod parsing;
pub mod tools;
