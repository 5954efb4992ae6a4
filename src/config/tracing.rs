use tracing_forest::ForestLayer;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "blogview=debug,tower_http=info,info";

pub trait AppTracingExt: tracing::Subscriber {
    fn with_app_filter(self) -> tracing_subscriber::layer::Layered<EnvFilter, Self>
    where
        Self: Sized,
    {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
        self.with(filter)
    }
}

impl<S: tracing::Subscriber> AppTracingExt for S {}

pub fn init() {
    tracing_subscriber::registry()
        .with_app_filter()
        .with(ForestLayer::default())
        .init();
}
