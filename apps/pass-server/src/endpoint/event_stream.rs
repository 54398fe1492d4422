use std::convert::Infallible;
use std::time::Duration;

use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::{self, Stream, StreamExt};
use pass_core::model::correlation_id::CorrelationId;
use pass_core::service::relay::{RelayService, RelayedResult};
use serde::Serialize;

const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// Single event stream for one correlation id.
///
/// Emits one `message` event carrying `to_event(result)` as JSON once the
/// result is in the relay, then ends. Ends without an event after the relay
/// stream timeout.
///
/// The result is taken from the relay before the frame is written. A client
/// that disconnects in between loses it and later reads see `DELIVERED`
/// (at-most-once delivery).
pub(crate) fn completion_events<T, D>(
    relay: RelayService<T>,
    id: CorrelationId,
    to_event: impl FnOnce(T) -> D + Send + 'static,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>>
where
    T: RelayedResult,
    D: Serialize,
{
    let stream = stream::once(async move {
        match relay.wait_for(id.clone()).await {
            Ok(value) => match Event::default().json_data(to_event(value)) {
                Ok(event) => Some(event),
                Err(error) => {
                    tracing::error!(%id, %error, "Failed to encode completion event");
                    None
                }
            },
            Err(error) => {
                tracing::info!(%id, %error, "Event stream closed without result");
                None
            }
        }
    })
    .filter_map(|event| async move { event.map(Ok) });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(KEEP_ALIVE_INTERVAL)
            .text("ping"),
    )
}
