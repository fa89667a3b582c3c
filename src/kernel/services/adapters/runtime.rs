use tokio::runtime::Handle;

use crate::kernel::services::ports::{AsyncExecutor, BoxFuture};

/// Spawns host tasks onto a tokio runtime.
#[derive(Clone)]
pub struct TokioExecutor {
    handle: Handle,
}

impl TokioExecutor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Must be called from inside a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }
}

impl AsyncExecutor for TokioExecutor {
    fn spawn(&self, task: BoxFuture) {
        self.handle.spawn(task);
    }
}
