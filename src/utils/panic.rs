use std::panic;

/// Routes panic messages through `tracing` so they end up next to the request
/// logs instead of on bare stderr.
pub fn set_hook() {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|location| format!("{}:{}", location.file(), location.line()))
            .unwrap_or_default();

        let payload = info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("unknown panic payload");

        error!(%location, "panicked: {message}");
    }));
}
