use super::CompletionWaiter;
use super::mapper::MessageDecoder;
use crate::provider::completion_stream::CompletionSubscription;
use crate::service::error::CompletionError;

impl CompletionWaiter {
    /// Races the subscription against the timeout. Whatever settles first
    /// wins; the subscription is closed exactly once before returning.
    ///
    /// The stream arm settles both the success and the error outcome (a
    /// decoded result, or a stream failure/end); the timer arm is the third.
    pub async fn wait<T>(
        &self,
        mut subscription: Box<dyn CompletionSubscription>,
        decode: MessageDecoder<T>,
    ) -> Result<T, CompletionError> {
        let result = tokio::select! {
            result = first_decoded_message(subscription.as_mut(), decode) => result,
            _ = tokio::time::sleep(self.timeout) => Err(CompletionError::Timeout(self.timeout)),
        };

        subscription.close();

        match &result {
            Ok(_) => tracing::debug!("Completion received"),
            Err(error) => tracing::warn!(%error, "Completion wait failed"),
        }

        result
    }
}

async fn first_decoded_message<T>(
    subscription: &mut dyn CompletionSubscription,
    decode: MessageDecoder<T>,
) -> Result<T, CompletionError> {
    loop {
        match subscription.next_message().await {
            Some(Ok(data)) => {
                if let Some(value) = decode(&data)? {
                    return Ok(value);
                }
            }
            Some(Err(error)) => return Err(CompletionError::Stream(error.to_string())),
            None => {
                return Err(CompletionError::Stream(
                    "stream ended before completion".to_string(),
                ));
            }
        }
    }
}
