use std::collections::VecDeque;

use futures::StreamExt;
use futures::stream::BoxStream;
use url::Url;

use super::{
    CompletionChannel, CompletionStreamError, CompletionStreamProvider, CompletionSubscription,
};
use crate::model::correlation_id::CorrelationId;
use crate::util::backend_url::backend_endpoint;

/// Subscribes over `text/event-stream` to the relay endpoints of a pass server.
#[derive(Clone)]
pub struct SseStreamProvider {
    client: reqwest::Client,
    base_url: String,
}

impl SseStreamProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn events_url(
        &self,
        channel: CompletionChannel,
        id: &CorrelationId,
    ) -> Result<Url, CompletionStreamError> {
        let mut url = backend_endpoint(&self.base_url, channel.events_path())
            .map_err(|e| CompletionStreamError::Subscribe(e.to_string()))?;
        url.query_pairs_mut().append_pair("id", id.as_str());

        Ok(url)
    }
}

#[async_trait::async_trait]
impl CompletionStreamProvider for SseStreamProvider {
    async fn subscribe(
        &self,
        channel: CompletionChannel,
        id: &CorrelationId,
    ) -> Result<Box<dyn CompletionSubscription>, CompletionStreamError> {
        let url = self.events_url(channel, id)?;
        tracing::debug!(%url, "Opening completion stream");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/event-stream")
            .send()
            .await
            .map_err(|e| CompletionStreamError::Subscribe(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CompletionStreamError::Subscribe(format!(
                "unexpected status {}",
                response.status()
            )));
        }

        let stream = response
            .bytes_stream()
            .map(|chunk| {
                chunk
                    .map(|bytes| bytes.to_vec())
                    .map_err(|e| CompletionStreamError::Transport(e.to_string()))
            })
            .boxed();

        Ok(Box::new(SseSubscription::new(stream)))
    }
}

type ChunkStream = BoxStream<'static, Result<Vec<u8>, CompletionStreamError>>;

pub struct SseSubscription {
    stream: Option<ChunkStream>,
    decoder: SseDecoder,
    ready: VecDeque<String>,
}

impl SseSubscription {
    pub fn new(stream: ChunkStream) -> Self {
        Self {
            stream: Some(stream),
            decoder: SseDecoder::default(),
            ready: VecDeque::new(),
        }
    }
}

#[async_trait::async_trait]
impl CompletionSubscription for SseSubscription {
    async fn next_message(&mut self) -> Option<Result<String, CompletionStreamError>> {
        loop {
            if let Some(message) = self.ready.pop_front() {
                return Some(Ok(message));
            }

            let stream = self.stream.as_mut()?;
            match stream.next().await {
                Some(Ok(chunk)) => self.ready.extend(self.decoder.feed(&chunk)),
                Some(Err(error)) => {
                    self.stream = None;
                    return Some(Err(error));
                }
                None => {
                    self.stream = None;
                    return None;
                }
            }
        }
    }

    fn close(&mut self) {
        if self.stream.take().is_some() {
            tracing::debug!("Completion stream closed");
        }
    }
}

/// Incremental `text/event-stream` parser.
///
/// Only events without an `event:` field (or with `event: message`) are
/// emitted, matching what a browser `onmessage` handler would see.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    data: Vec<String>,
    event_type: Option<String>,
}

impl SseDecoder {
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut messages = vec![];
        while let Some(position) = self.buffer.iter().position(|byte| *byte == b'\n') {
            let mut line: Vec<u8> = self.buffer.drain(..=position).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }

            let line = String::from_utf8_lossy(&line);
            if let Some(message) = self.process_line(&line) {
                messages.push(message);
            }
        }

        messages
    }

    fn process_line(&mut self, line: &str) -> Option<String> {
        if line.is_empty() {
            return self.dispatch();
        }

        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "data" => self.data.push(value.to_owned()),
            "event" => self.event_type = Some(value.to_owned()),
            _ => {}
        }

        None
    }

    fn dispatch(&mut self) -> Option<String> {
        let event_type = self.event_type.take();
        let data = std::mem::take(&mut self.data);

        if data.is_empty() {
            return None;
        }

        match event_type.as_deref() {
            None | Some("") | Some("message") => Some(data.join("\n")),
            Some(_) => None,
        }
    }
}
