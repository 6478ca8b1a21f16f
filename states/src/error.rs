use thiserror::Error;

use crate::TaskId;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("task {0:?} was cancelled before delivering its result")]
    Cancelled(TaskId),
    #[error("task slot for {0:?} was dropped before the result arrived")]
    Disconnected(TaskId),
}

impl Error {
    pub fn task_id(&self) -> TaskId {
        match self {
            Self::Cancelled(id) | Self::Disconnected(id) => *id,
        }
    }
}
