//! Fire-and-forget channel for surfacing rejected operations to a human.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

/// Observer for rejection notices.
///
/// The store invokes this exactly once per rejected operation, with one of
/// the fixed messages in [`store::notices`](crate::store::notices), and
/// never on success. Whatever the sink does with the message is its own
/// business; the store does not look at a result.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}

/// Sink that forwards notices to a consumer task over an unbounded channel.
///
/// This is the shape a UI layer subscribes to: receive on the returned end
/// and render each message as a toast.
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelSink {
    /// Returns the sink and the receiving end for the consumer.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, message: &str) {
        // The consumer may already be gone; a notice has no one to fail to.
        let _ = self.sender.send(message.to_string());
    }
}

/// Test sink that records every notice it receives.
#[derive(Clone, Default)]
pub struct RecordingSink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
