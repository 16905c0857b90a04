//! HTTP server for the task API
//!
//! Wires the five routes to an injected repository and serves them with
//! axum. The repository handle is the only state; it is passed in at
//! construction rather than read from a global.

use axum::{
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::info;

use crate::handlers;
use task_core::TaskRepository;

/// Task API server generic over the repository implementation
pub struct ApiServer<R> {
    repository: Arc<R>,
}

impl<R: TaskRepository + 'static> ApiServer<R> {
    /// Create a new server around the given repository handle
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Build the router with all five routes
    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(handlers::root))
            .route(
                "/tasks",
                post(handlers::create_task::<R>).get(handlers::list_tasks::<R>),
            )
            .route(
                "/tasks/:id",
                get(handlers::get_task::<R>)
                    .put(handlers::update_task::<R>)
                    .delete(handlers::delete_task::<R>),
            )
            .with_state(self.repository)
    }

    /// Bind the address and serve until the task is cancelled
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| format!("invalid address '{addr}': {e}"))?;

        let app = self.router();

        info!("task API listening on {}", socket_addr);
        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mocks::MockTaskRepository;

    #[test]
    fn test_router_builds() {
        let repo = Arc::new(MockTaskRepository::new());
        let _router = ApiServer::new(repo).router();
    }

    #[tokio::test]
    async fn test_serve_rejects_malformed_address() {
        let repo = Arc::new(MockTaskRepository::new());
        let result = ApiServer::new(repo).serve("not-an-address").await;
        assert!(result.is_err());
    }
}
