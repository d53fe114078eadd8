//! Tracing setup and the logging capability handed to request handlers.

use crate::config::Env;
use tracing_subscriber::EnvFilter;

/// Sink for malformed-input reports from the request layer.
pub trait RequestLog: Send + Sync {
    fn malformed_input(&self, op: &'static str, detail: &str);
}

/// Default sink: forwards to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl RequestLog for TracingLog {
    fn malformed_input(&self, op: &'static str, detail: &str) {
        tracing::warn!(op, detail, "malformed input");
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the per-env level.
pub fn init_tracing(env: Env) {
    let default_level = match env {
        Env::Local | Env::Dev => "person_service=debug,person_server=debug,tower_http=debug",
        Env::Prod => "person_service=info,person_server=info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    match env {
        Env::Local => builder.init(),
        Env::Dev | Env::Prod => builder.json().init(),
    }
}
