//! Task identity, cancellation handles and the platform spawn shim.
//!
//! - `TaskId`: which slot value type spawned the task, plus a generation counter
//! - `TaskHandle`: a `TaskId` paired with its `CancellationToken`
//! - `spawn_task`: Tokio on native, `spawn_local` on wasm32

use std::any::TypeId;
use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Unique identifier for a spawned task.
///
/// The generation distinguishes successive tasks spawned from the same slot, which is
/// how a result from an earlier (replaced or torn down) request is recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher generation values indicate more recently spawned tasks.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a spawned async task with cooperative cancellation support.
///
/// Cancelling does not abort the future. The task is expected to race its work against
/// `token.cancelled()`; anything it still manages to deliver afterwards is discarded by
/// the owning [`crate::TaskSlot`].
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// Spawns a detached future on the platform executor.
///
/// Native builds require an entered Tokio runtime (the binary enters one before
/// starting eframe, tests run under `#[tokio::test]`).
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_task<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}

/// Spawns a detached future on the browser's microtask queue.
#[cfg(target_arch = "wasm32")]
pub fn spawn_task<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
