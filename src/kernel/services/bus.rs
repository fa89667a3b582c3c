use tokio::sync::mpsc::error::{SendError, TryRecvError};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::kernel::error::StoreError;

#[derive(Debug)]
pub enum KernelMessage {
    Action(crate::kernel::Action),
    /// A task failed in a way the store cannot absorb.
    Failed(StoreError),
}

#[derive(Clone)]
pub struct KernelBusSender {
    tx: UnboundedSender<KernelMessage>,
}

pub struct KernelBusReceiver {
    rx: UnboundedReceiver<KernelMessage>,
}

pub fn kernel_bus() -> (KernelBusSender, KernelBusReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (KernelBusSender { tx }, KernelBusReceiver { rx })
}

impl KernelBusSender {
    pub fn send(&self, msg: KernelMessage) -> Result<(), SendError<KernelMessage>> {
        self.tx.send(msg)
    }
}

impl KernelBusReceiver {
    pub fn try_recv(&mut self) -> Result<KernelMessage, TryRecvError> {
        self.rx.try_recv()
    }

    pub async fn recv(&mut self) -> Option<KernelMessage> {
        self.rx.recv().await
    }
}
