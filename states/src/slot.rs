use std::any::TypeId;
use std::future::Future;

use flume::{Receiver, Sender};
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::{Error, TaskHandle, TaskId, spawn_task};

/// Sender half handed to a spawned task.
///
/// Delivery is refused once the task has been cancelled, so a request that resolves
/// after teardown cannot write into the view model.
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater<T> {
    id: TaskId,
    cancel: CancellationToken,
    send: Sender<(TaskId, T)>,
}

impl<T> LatestOnlyUpdater<T> {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn set(&self, value: T) -> Result<(), Error> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled(self.id));
        }

        self.send
            .send((self.id, value))
            .map_err(|_disconnected| Error::Disconnected(self.id))
    }
}

/// A single-occupancy task slot.
///
/// At most one task is live per slot. Spawning again cancels the previous task, and
/// dropping the slot cancels whatever is still in flight.
#[derive(Debug)]
pub struct TaskSlot<T> {
    generation: u64,
    current: Option<TaskHandle>,
    send: Sender<(TaskId, T)>,
    recv: Receiver<(TaskId, T)>,
}

impl<T: Send + 'static> Default for TaskSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> TaskSlot<T> {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            generation: 0,
            current: None,
            send,
            recv,
        }
    }

    /// Spawns `task`, replacing (and cancelling) the previous one.
    ///
    /// The closure runs synchronously and receives the updater and the cancellation
    /// token for the new generation; the future it returns is spawned detached.
    pub fn spawn<F, Fut>(&mut self, task: F) -> TaskHandle
    where
        F: FnOnce(LatestOnlyUpdater<T>, CancellationToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        self.generation += 1;
        let id = TaskId::new(TypeId::of::<T>(), self.generation);
        let token = CancellationToken::new();
        let handle = TaskHandle::new(id, token.clone());

        let updater = LatestOnlyUpdater {
            id,
            cancel: token.clone(),
            send: self.send.clone(),
        };

        spawn_task(task(updater, token));
        self.current = Some(handle.clone());
        handle
    }

    /// Drains delivered values and returns the newest one from the live task.
    ///
    /// Values from cancelled or superseded generations are dropped.
    pub fn try_latest(&mut self) -> Option<T> {
        let mut latest = None;

        while let Ok((id, value)) = self.recv.try_recv() {
            match &self.current {
                Some(handle) if handle.id() == id && !handle.is_cancelled() => {
                    latest = Some(value);
                }
                _ => debug!("Ignoring late result from task {id:?}"),
            }
        }

        latest
    }

    /// Cancels the live task, if any. Results it delivers afterwards are ignored.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            debug!("Cancelling task {:?}", handle.id());
            handle.cancel();
        }
    }

    pub fn current(&self) -> Option<&TaskHandle> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T> Drop for TaskSlot<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.cancel();
        }
    }
}
