#![cfg(feature = "std")]

//! STOMP `SEND` frames written to an already connected byte stream.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::{timeout, Duration};

use crate::config::{ClientConfig, Destinations, ShipsEncoding};
use crate::protocol::Outbound;
use crate::transport::Transport;

/// Encode a STOMP 1.2 `SEND` frame, including the trailing NUL.
pub fn encode_send_frame(destination: &str, content_type: &str, body: &str) -> Vec<u8> {
    let mut frame = format!(
        "SEND\ndestination:{}\ncontent-type:{}\ncontent-length:{}\n\n",
        escape_header(destination),
        content_type,
        body.len()
    )
    .into_bytes();
    frame.extend_from_slice(body.as_bytes());
    frame.push(0);
    frame
}

/// Header value escaping per STOMP 1.2.
fn escape_header(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            ':' => out.push_str("\\c"),
            _ => out.push(ch),
        }
    }
    out
}

pub struct StompTransport<W> {
    writer: W,
    destinations: Destinations,
    encoding: ShipsEncoding,
    timeout_duration: Duration,
    max_frame_size: usize,
    shutdown: Arc<AtomicBool>,
}

impl<W: AsyncWrite + Unpin + Send> StompTransport<W> {
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, &ClientConfig::default())
    }

    pub fn with_config(writer: W, config: &ClientConfig) -> Self {
        Self {
            writer,
            destinations: config.destinations.clone(),
            encoding: config.ships_encoding,
            timeout_duration: config.send_timeout,
            max_frame_size: config.max_frame_size,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request graceful shutdown of the transport.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// Check if shutdown has been requested.
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl<W: AsyncWrite + Unpin + Send> Transport for StompTransport<W> {
    async fn send(&mut self, msg: Outbound) -> anyhow::Result<()> {
        if self.is_shutdown() {
            return Err(anyhow::anyhow!("Transport is shut down"));
        }

        let body = msg.body(self.encoding)?;
        let frame = encode_send_frame(
            msg.destination(&self.destinations),
            msg.content_type(),
            &body,
        );
        if frame.len() > self.max_frame_size {
            return Err(anyhow::anyhow!(
                "Frame too large: {} bytes (max: {})",
                frame.len(),
                self.max_frame_size
            ));
        }

        let writer = &mut self.writer;
        let send_op = async {
            writer.write_all(&frame).await.map_err(|e| {
                if e.kind() == std::io::ErrorKind::BrokenPipe
                    || e.kind() == std::io::ErrorKind::ConnectionReset
                {
                    anyhow::anyhow!("Connection closed by peer")
                } else {
                    anyhow::anyhow!("Write error: {}", e)
                }
            })?;
            writer
                .flush()
                .await
                .map_err(|e| anyhow::anyhow!("Flush error: {}", e))?;
            anyhow::Ok(())
        };

        timeout(self.timeout_duration, send_op)
            .await
            .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", self.timeout_duration))??;
        log::debug!("sent {} bytes to {}", frame.len(), msg.destination(&self.destinations));
        Ok(())
    }
}
