use crate::base::Callback;
use anyhow::{anyhow, Error};
use log::debug;
use std::sync::mpsc;
use std::sync::mpsc::Sender;
use std::thread;

/// An execution context that tasks can be posted to.
///
/// A task posted here runs on the context's own thread, in posting order.
/// Posting is fire-and-forget; the result only reports whether the task
/// could be handed off.
pub trait ExecutionContext: Send + Sync {
    fn post(&self, task: Callback) -> Result<(), Error>;
}

/// A queue backed by a dedicated worker thread.
pub struct TaskExecutor {
    sender: Sender<Callback>,
}

impl Clone for TaskExecutor {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl TaskExecutor {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || loop {
            let task: Callback = match receiver.recv() {
                Err(_) => {
                    debug!("task queue closed");
                    break;
                }
                Ok(task) => task,
            };
            task.call();
        });
        Self { sender }
    }
}

impl ExecutionContext for TaskExecutor {
    fn post(&self, task: Callback) -> Result<(), Error> {
        self.sender
            .send(task)
            .map_err(|_| anyhow!("task queue closed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;
    use std::time::Duration;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_posted_tasks_run_in_order() {
        init_logs();
        let executor = TaskExecutor::new();
        let (sender, receiver) = channel();
        for i in 0..3 {
            let sender = sender.clone();
            executor
                .post(Callback::new(move || {
                    sender.send(i).unwrap();
                }))
                .unwrap();
        }
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(receiver.recv_timeout(Duration::from_secs(5)).unwrap());
        }
        assert_eq!(vec![0, 1, 2], seen);
    }

    #[test]
    fn test_clone_posts_to_same_queue() {
        init_logs();
        let executor = TaskExecutor::new();
        let clone = executor.clone();
        let (sender, receiver) = channel();
        clone
            .post(Callback::new(move || {
                sender.send(162534).unwrap();
            }))
            .unwrap();
        assert_eq!(
            162534,
            receiver.recv_timeout(Duration::from_secs(5)).unwrap()
        );
    }
}
