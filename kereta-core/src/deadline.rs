use crate::{ClientError, ClientResult};
use std::future::Future;
use std::time::Duration;

/// Compose a collaborator call with an explicit deadline. A call that never
/// completes would otherwise leave its workflow "in progress" forever; an
/// elapsed deadline surfaces as a `Network` failure like any other request
/// that never finished.
pub async fn with_deadline<T, F>(timeout: Duration, fut: F) -> ClientResult<T>
where
    F: Future<Output = ClientResult<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => Err(ClientError::Network(format!(
            "request timed out after {}s",
            timeout.as_secs()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_deadline_elapsed_maps_to_network_error() {
        let result: ClientResult<()> = with_deadline(Duration::from_secs(5), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;

        match result {
            Err(ClientError::Network(msg)) => assert!(msg.contains("timed out")),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_deadline_passes_through_inner_result() {
        let result = with_deadline(Duration::from_secs(5), async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }
}
