#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::protocol::Outbound;
use crate::transport::Transport;

/// Sending end of an in-process channel.
pub struct InMemoryTransport {
    queue: Arc<Mutex<VecDeque<Outbound>>>,
}

/// Receiving end paired with an [`InMemoryTransport`].
pub struct InMemoryReceiver {
    queue: Arc<Mutex<VecDeque<Outbound>>>,
}

impl InMemoryTransport {
    pub fn pair() -> (Self, InMemoryReceiver) {
        let queue = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                queue: queue.clone(),
            },
            InMemoryReceiver { queue },
        )
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, msg: Outbound) -> anyhow::Result<()> {
        if Arc::strong_count(&self.queue) == 1 {
            return Err(anyhow::anyhow!("Channel closed"));
        }
        let mut queue = self
            .queue
            .lock()
            .map_err(|_| anyhow::anyhow!("Channel poisoned"))?;
        queue.push_back(msg);
        Ok(())
    }
}

impl InMemoryReceiver {
    /// Wait for the next message. Fails once the sender is gone and the
    /// queue is drained.
    pub async fn recv(&mut self) -> anyhow::Result<Outbound> {
        loop {
            if let Some(msg) = self.try_recv()? {
                return Ok(msg);
            }
            if Arc::strong_count(&self.queue) == 1 {
                return Err(anyhow::anyhow!("Channel closed"));
            }
            yield_now().await;
        }
    }

    /// Next queued message, if any, without waiting.
    pub fn try_recv(&mut self) -> anyhow::Result<Option<Outbound>> {
        let mut queue = self
            .queue
            .lock()
            .map_err(|_| anyhow::anyhow!("Channel poisoned"))?;
        Ok(queue.pop_front())
    }
}
