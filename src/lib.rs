#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records day-to-day expenses, keeps monthly budgets with
//! optional per-category limits and reports spending against them.

pub mod cli;
pub mod errors;
pub mod export;
pub mod utils;

pub use errors::{Result, TrackerError};

/// Initializes global tracing. Repeated calls are no-ops.
pub fn init() {
    utils::init_tracing();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
