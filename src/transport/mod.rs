use crate::protocol::Outbound;

/// Outbound half of the real-time channel to the game server.
#[async_trait::async_trait]
pub trait Transport: Send {
    async fn send(&mut self, msg: Outbound) -> anyhow::Result<()>;
}

#[cfg(feature = "std")]
pub mod in_memory;
#[cfg(feature = "std")]
pub mod stomp;
