use crate::base::Callback;
use crate::bundle::Bundle;
use crate::error::{RemoteError, RemoteResult};
use crate::task_executor::ExecutionContext;
use log::debug;
use std::sync::{Arc, Mutex};

/// A one-shot notification target, possibly living in another process.
///
/// Delivery may fail if the remote endpoint is gone; the handle is never
/// reused after its single completion signal has been delivered.
pub trait RemoteCallback: Send + Sync {
    fn send_result(&self, data: Option<Bundle>) -> RemoteResult<()>;
}

type ListenerFn = Box<dyn FnOnce() + Send + 'static>;

/// Wraps a caller's listener so that delivery re-enters the execution
/// context that owns the caller's view before the listener runs.
///
/// The listener is consumed on first delivery; a second delivery is a no-op.
pub struct OnceListenerCallback {
    executor: Arc<dyn ExecutionContext>,
    listener: Mutex<Option<ListenerFn>>,
}

impl OnceListenerCallback {
    pub fn wrap<F: FnOnce() + Send + 'static>(
        executor: Arc<dyn ExecutionContext>,
        listener: F,
    ) -> Arc<OnceListenerCallback> {
        Arc::new(OnceListenerCallback {
            executor,
            listener: Mutex::new(Some(Box::new(listener))),
        })
    }
}

impl RemoteCallback for OnceListenerCallback {
    fn send_result(&self, _data: Option<Bundle>) -> RemoteResult<()> {
        let listener = match self.listener.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => {
                return Err(RemoteError::Internal(
                    "listener slot poisoned".to_string(),
                ))
            }
        };
        let listener = match listener {
            Some(listener) => listener,
            None => {
                debug!("start listener already notified");
                return Ok(());
            }
        };
        self.executor
            .post(Callback::from_box(listener))
            .map_err(|_| RemoteError::Disconnected)
    }
}
