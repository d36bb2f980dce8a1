//! Background task management for fetches and mutations.
//!
//! Every HTTP round-trip runs on a spawned task; the outcome comes back
//! over an unbounded action channel and is applied when it resolves.
//! Two requests racing (rapid filter changes) therefore apply in
//! completion order, and a superseded query key simply addresses a
//! different cache entry when its result lands.

use super::actions::Action;
use crate::api::ApiError;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a read query. The produced action carries the data; a
    /// failure becomes [`Action::FetchFailed`] and the screen renders its
    /// empty state.
    pub fn spawn_fetch<F, Fut>(&mut self, description: String, fetch: F) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<Action>> + Send + 'static,
    {
        let action_sender = self.action_sender.clone();
        let desc_for_task = description.clone();

        let handle = tokio::spawn(async move {
            match fetch().await {
                Ok(action) => {
                    let _ = action_sender.send(action);
                }
                Err(e) => {
                    let _ = action_sender.send(Action::FetchFailed(format!("{desc_for_task}: {e}")));
                }
            }
        });

        self.track(handle, description)
    }

    /// Spawn a mutation. Success sends the given message as
    /// [`Action::MutationSucceeded`] followed by [`Action::RefreshData`];
    /// failure sends [`Action::MutationFailed`] with the server's message
    /// and leaves the triggering dialog open for retry.
    pub fn spawn_mutation<F, Fut>(&mut self, description: String, operation: F) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<String>> + Send + 'static,
    {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            match operation().await {
                Ok(message) => {
                    let _ = action_sender.send(Action::MutationSucceeded(message));
                    let _ = action_sender.send(Action::RefreshData);
                }
                Err(e) => {
                    // Prefer the server's wording over transport details
                    let message = match e.downcast_ref::<ApiError>() {
                        Some(api) => api.user_message(),
                        None => e.to_string(),
                    };
                    let _ = action_sender.send(Action::MutationFailed(message));
                }
            }
        });

        self.track(handle, description)
    }

    /// Spawn a fire-and-forget request (story views, card grades).
    /// Failures are logged and dropped; nothing user-visible depends on
    /// the outcome.
    pub fn spawn_fire_and_forget<F, Fut>(&mut self, description: String, operation: F) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let desc_for_task = description.clone();
        let handle = tokio::spawn(async move {
            if let Err(e) = operation().await {
                log::warn!("{desc_for_task} failed: {e}");
            }
        });

        self.track(handle, description)
    }

    fn track(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Drop tasks whose handles have finished.
    pub fn cleanup_finished(&mut self) {
        self.tasks.retain(|_, task| !task.handle.is_finished());
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Abort everything still running; called on teardown so no callback
    /// fires against a dismantled UI.
    pub fn abort_all(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }
}
