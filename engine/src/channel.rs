//! Minimal channel abstraction used between the trading system's moving
//! parts: request queues feeding instrument workers and the trading-reply
//! channel feeding the acceptor.

use tokio::sync::mpsc;

/// Transmitter capable of sending a message to a receiver.
pub trait Tx<Message>: Send {
    /// Send a message; errors only when the receiver was dropped.
    fn send(&self, message: Message) -> Result<(), mpsc::error::SendError<Message>>;
}

/// Unbounded transmitter backed by a tokio mpsc channel.
///
/// Sends never block, so the matching path hands replies off without
/// waiting for the session-level flush.
#[derive(Debug)]
pub struct UnboundedTx<Message> {
    tx: mpsc::UnboundedSender<Message>,
}

impl<Message> Clone for UnboundedTx<Message> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<Message> UnboundedTx<Message> {
    pub fn new(tx: mpsc::UnboundedSender<Message>) -> Self {
        Self { tx }
    }
}

impl<Message: Send> Tx<Message> for UnboundedTx<Message> {
    fn send(&self, message: Message) -> Result<(), mpsc::error::SendError<Message>> {
        self.tx.send(message)
    }
}

/// Construct an unbounded channel pair.
pub fn unbounded<Message>() -> (UnboundedTx<Message>, mpsc::UnboundedReceiver<Message>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UnboundedTx::new(tx), rx)
}
