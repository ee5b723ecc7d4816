//! Standardized logging configuration for the Arara trading system.
//!
//! Provides structured logs with an environment filter and a layer that
//! suppresses the per-event noise generated inside the market-data publish
//! span, which fires on every book mutation.
//!
//! ```bash
//! # Debug level for all modules
//! export RUST_LOG=debug
//!
//! # Module-specific levels
//! export RUST_LOG=arara_engine=debug,arara_idgen=warn
//! ```

use crate::mdata::MARKET_DATA_PUBLISH_SPAN_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise human-readable logging.
///
/// Filters the high-frequency events emitted while the market-data
/// aggregator publishes updates.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(MarketDataSpanFilter)
        .init()
}

/// Initialise JSON logging for aggregators and observability pipelines.
pub fn init_json_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
        .with(MarketDataSpanFilter)
        .init()
}

struct MarketDataSpanFilter;

impl<S> tracing_subscriber::layer::Layer<S> for MarketDataSpanFilter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn event_enabled(
        &self,
        _: &tracing::Event<'_>,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) -> bool {
        if let Some(span) = ctx.lookup_current() {
            span.name() != MARKET_DATA_PUBLISH_SPAN_NAME
        } else {
            true
        }
    }
}
