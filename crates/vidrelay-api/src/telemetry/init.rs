use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str = "vidrelay_api=debug,vidrelay_storage=debug,tower_http=debug";

/// Initialize tracing. Production emits JSON lines; everything else gets the
/// compact console format.
pub fn init_telemetry(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let (json_layer, console_layer) = if json {
        (Some(tracing_subscriber::fmt::layer().json()), None)
    } else {
        let console_fmt = tracing_subscriber::fmt::layer()
            .event_format(Format::default().compact().with_target(false));
        (None, Some(console_fmt))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(console_layer)
        .try_init()?;

    tracing::debug!(json, "Tracing initialized");
    Ok(())
}
