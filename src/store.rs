//! In-memory task store.
//!
//! Holds the ordered task list and the next-identifier counter. All mutation
//! goes through the HTTP handlers in `server`, serialized by the mutex that
//! wraps the store in `AppState`.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::error::{StoreError, StoreResult};
use crate::types::{CreateTaskInput, Task, TaskStatus, UpdateTaskFields};

/// Source of timestamps for created/updated stamps.
///
/// Injectable so tests can control creation/update ordering deterministically.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Ordered collection of tasks with monotonically increasing ids.
///
/// Identifiers are never reused, even after deletion.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    clock: Arc<dyn Clock>,
}

impl TaskStore {
    /// Create an empty store backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store with an explicit clock (for testing).
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    /// All tasks in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn get(&self, id: u64) -> StoreResult<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(StoreError::task_not_found)
    }

    /// Create a task. Fails when `title` is missing or empty.
    pub fn create(&mut self, input: CreateTaskInput) -> StoreResult<Task> {
        let title = input
            .title
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if title.is_empty() {
            return Err(StoreError::validation("Title is required"));
        }

        let task = Task {
            id: self.next_id,
            title,
            description: input.description.unwrap_or_default(),
            status: TaskStatus::Pending,
            created_at: self.clock.now(),
            updated_at: None,
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Partially update a task: only supplied fields are replaced.
    ///
    /// An explicit empty `description` overwrites; an empty `title` is
    /// treated as "no change" to keep the non-empty title invariant.
    pub fn update(&mut self, id: u64, fields: UpdateTaskFields) -> StoreResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(StoreError::task_not_found)?;

        if let Some(title) = fields.title
            && !title.trim().is_empty()
        {
            task.title = title;
        }
        if let Some(description) = fields.description {
            task.description = description;
        }
        if let Some(status) = fields.status {
            task.status = status;
        }
        task.updated_at = Some(self.clock.now());

        Ok(task.clone())
    }

    /// Remove a task and return it. The id is never reallocated.
    pub fn delete(&mut self, id: u64) -> StoreResult<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(StoreError::task_not_found)?;
        Ok(self.tasks.remove(index))
    }

    /// Preload the two sample tasks shipped with the upstream demo.
    pub fn seed_demo(&mut self) {
        let _ = self.create(CreateTaskInput {
            title: Some("Setup DevOps Pipeline".to_string()),
            description: Some("Create CI/CD pipeline with GitHub Actions".to_string()),
        });
        let _ = self.create(CreateTaskInput {
            title: Some("Deploy to Production".to_string()),
            description: Some("Deploy application to production environment".to_string()),
        });
        // First sample task starts in progress, without an update stamp.
        if let Some(first) = self.tasks.first_mut() {
            first.status = TaskStatus::InProgress;
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
