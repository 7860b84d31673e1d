//! HTTP surface for the task board.
//!
//! Axum handlers translate method+path into store operations and shape the
//! uniform `success` envelope. The router carries permissive CORS and request
//! tracing layers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::{Clock, SystemClock, TaskStore};
use crate::types::{CreateTaskInput, Task, UpdateTaskFields};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<TaskStore>>,
    environment: Arc<str>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Wrap a store for sharing across handlers.
    pub fn new(store: TaskStore, environment: impl Into<String>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            environment: environment.into().into(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Run a closure with exclusive access to the store.
    ///
    /// The lock is never held across an await point.
    fn with_store<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut TaskStore) -> T,
    {
        let mut store = self.store.lock().unwrap();
        f(&mut store)
    }
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Utc>,
    environment: String,
    version: &'static str,
}

/// Envelope for list responses.
#[derive(Serialize)]
struct TaskListResponse {
    success: bool,
    data: Vec<Task>,
    count: usize,
}

/// Envelope for single-task responses.
#[derive(Serialize)]
struct TaskResponse {
    success: bool,
    data: Task,
}

/// Envelope for delete responses.
#[derive(Serialize)]
struct DeletedTaskResponse {
    success: bool,
    data: Task,
    message: &'static str,
}

/// Liveness probe.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: state.clock.now(),
        environment: state.environment.to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// API root - returns available endpoints.
async fn api_root() -> impl IntoResponse {
    Json(serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "tasks": "/tasks",
        }
    }))
}

/// Parse a path segment as a task id. Non-numeric input is treated as an
/// unknown task rather than a distinct parse-error class.
fn parse_task_id(raw: &str) -> StoreResult<u64> {
    raw.parse().map_err(|_| StoreError::task_not_found())
}

/// `GET /tasks` - list all tasks in insertion order.
async fn list_tasks(State(state): State<AppState>) -> Json<TaskListResponse> {
    let data = state.with_store(|store| store.list().to_vec());
    let count = data.len();
    Json(TaskListResponse {
        success: true,
        data,
        count,
    })
}

/// `GET /tasks/{id}` - fetch one task.
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StoreResult<Json<TaskResponse>> {
    let id = parse_task_id(&id)?;
    let data = state.with_store(|store| store.get(id).cloned())?;
    Ok(Json(TaskResponse {
        success: true,
        data,
    }))
}

/// `POST /tasks` - create a task.
async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<CreateTaskInput>,
) -> StoreResult<impl IntoResponse> {
    let data = state.with_store(|store| store.create(input)).map_err(|e| {
        warn!(error = %e, "Task creation rejected");
        e
    })?;
    info!(task_id = data.id, "Task created");
    Ok((
        StatusCode::CREATED,
        Json(TaskResponse {
            success: true,
            data,
        }),
    ))
}

/// `PUT /tasks/{id}` - partial update.
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<UpdateTaskFields>,
) -> StoreResult<Json<TaskResponse>> {
    let id = parse_task_id(&id)?;
    let data = state.with_store(|store| store.update(id, fields))?;
    info!(task_id = data.id, "Task updated");
    Ok(Json(TaskResponse {
        success: true,
        data,
    }))
}

/// `DELETE /tasks/{id}` - remove a task.
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StoreResult<Json<DeletedTaskResponse>> {
    let id = parse_task_id(&id)?;
    let data = state.with_store(|store| store.delete(id))?;
    info!(task_id = data.id, "Task deleted");
    Ok(Json(DeletedTaskResponse {
        success: true,
        data,
        message: "Task deleted successfully",
    }))
}

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    // Permissive CORS so a separately-hosted frontend can call the API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api_root))
        .route("/health", get(health))
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server on the specified port.
///
/// Returns a oneshot sender that signals graceful shutdown, the actual bound
/// address, and the join handle for the serve task.
pub async fn start_server(
    state: AppState,
    port: u16,
) -> anyhow::Result<(oneshot::Sender<()>, SocketAddr, JoinHandle<()>)> {
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    info!("Task board listening on http://{}", bound_addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Task board shutting down");
            })
            .await
        {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok((shutdown_tx, bound_addr, handle))
}
