#![cfg(feature = "std")]

//! Thin messaging layer between the placement screen and the game server.

use crate::protocol::Outbound;
use crate::submission::SubmissionPayload;
use crate::transport::Transport;

pub struct GameClient {
    transport: Box<dyn Transport>,
    connected: bool,
}

impl GameClient {
    /// Wrap a transport whose connection is already established.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            connected: true,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Send the completed fleet layout.
    pub async fn send_placement(&mut self, payload: SubmissionPayload) -> anyhow::Result<()> {
        log::info!("submitting placement for {}", payload.username);
        self.send(Outbound::PlaceShips(payload)).await
    }

    pub async fn send_window_init(&mut self) -> anyhow::Result<()> {
        self.send(Outbound::WindowInit).await
    }

    pub async fn send_id(&mut self, id: &str) -> anyhow::Result<()> {
        self.send(Outbound::Id(id.to_string())).await
    }

    async fn send(&mut self, msg: Outbound) -> anyhow::Result<()> {
        if !self.connected {
            return Err(anyhow::anyhow!("Not connected"));
        }
        if let Err(e) = self.transport.send(msg).await {
            log::warn!("send failed, marking client disconnected: {}", e);
            self.connected = false;
            return Err(e);
        }
        Ok(())
    }
}
