/// Text shown by `--version` on the command line, embedding the metadata emitted by `build.rs`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("EXPENSE_TRACKER_BUILD_HASH"),
    ", ",
    env!("EXPENSE_TRACKER_BUILD_STATUS"),
    ", built ",
    env!("EXPENSE_TRACKER_BUILD_TIMESTAMP"),
    ")"
);
