//! Async task management for non-blocking API operations.
//!
//! Fetches run in background tasks so the UI stays responsive while a request
//! is outstanding. Results come back to the main event loop over a tokio
//! channel:
//!
//! 1. The main loop notices the app has a pending page fetch
//! 2. It spawns the fetch via [`TaskSpawner::spawn_fetch_page`]
//! 3. The loop keeps rendering and handling input
//! 4. The task sends an [`ApiMessage`] when the request resolves
//! 5. The loop polls the channel with `try_recv()` and applies the result
//!
//! Every message carries the page index it answers so the app can discard
//! results that arrive after the user has already moved to a different page.

use tokio::sync::mpsc;

use crate::api::types::ArtworkPage;
use crate::api::ArticClient;

/// Messages sent from background tasks to the main event loop.
#[derive(Debug)]
pub enum ApiMessage {
    /// One page of artwork records resolved, successfully or not.
    PageFetched {
        /// The 0-based page index this result answers.
        page: u32,
        /// The decoded page, or the error rendered as a string.
        result: Result<ArtworkPage, String>,
    },
}

/// Spawns background tasks for async operations.
///
/// Holds the channel sender; each spawn method clones what it needs and
/// spawns a tokio task that reports back through the channel.
#[derive(Clone)]
pub struct TaskSpawner {
    tx: mpsc::UnboundedSender<ApiMessage>,
}

impl TaskSpawner {
    /// Create a new TaskSpawner with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<ApiMessage>) -> Self {
        Self { tx }
    }

    /// Spawn a task to fetch one page of artworks.
    ///
    /// `page` is the 0-based page index; the client performs the 1-based
    /// endpoint translation.
    pub fn spawn_fetch_page(&self, client: &ArticClient, page: u32) {
        let tx = self.tx.clone();
        let client = client.clone();
        tokio::spawn(async move {
            let result = client.fetch_page(page).await.map_err(|e| e.to_string());
            let _ = tx.send(ApiMessage::PageFetched { page, result });
        });
    }
}

/// Create a new task channel and spawner.
///
/// The receiver is polled in the main event loop; the spawner is used to
/// start fetches.
pub fn create_task_channel() -> (mpsc::UnboundedReceiver<ApiMessage>, TaskSpawner) {
    let (tx, rx) = mpsc::unbounded_channel();
    (rx, TaskSpawner::new(tx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Pagination;

    #[tokio::test]
    async fn test_message_carries_page_tag() {
        let (mut rx, spawner) = create_task_channel();

        // Send a synthetic result through the same channel the spawner uses.
        let page = ArtworkPage {
            data: vec![],
            pagination: Pagination {
                total: 0,
                limit: 10,
                current_page: 5,
                total_pages: 0,
            },
        };
        spawner
            .tx
            .send(ApiMessage::PageFetched {
                page: 4,
                result: Ok(page),
            })
            .unwrap();

        match rx.recv().await {
            Some(ApiMessage::PageFetched { page, result }) => {
                assert_eq!(page, 4);
                assert!(result.is_ok());
            }
            None => panic!("channel closed"),
        }
    }

    #[tokio::test]
    async fn test_error_crosses_channel_as_string() {
        let (mut rx, spawner) = create_task_channel();
        spawner
            .tx
            .send(ApiMessage::PageFetched {
                page: 0,
                result: Err("Network error: connection refused".to_string()),
            })
            .unwrap();

        match rx.recv().await {
            Some(ApiMessage::PageFetched { result, .. }) => {
                assert!(result.unwrap_err().contains("connection refused"));
            }
            None => panic!("channel closed"),
        }
    }
}
