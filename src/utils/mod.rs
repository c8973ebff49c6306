pub mod build_info;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();
const DEFAULT_DIRECTIVE: &str = "expense_tracker=warn,expense_core=warn,expense_storage_json=warn";

/// Initializes the global tracing subscriber. Events go to stderr; `RUST_LOG` overrides the level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        tracing::debug!("expense tracker tracing initialized");
    });
}
