//! JSON HTTP server for the listing and detail flows

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::content::{Post, PostDetail};
use crate::error::BlogError;
use crate::Blog;

/// Server state
struct ServerState {
    blog: Blog,
}

/// Body of `GET /api/posts`
#[derive(Debug, Serialize)]
pub struct Listing {
    pub posts: Vec<Post>,
}

/// Body of every error response
#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if self.is_client_error() {
            self.to_string()
        } else {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        };

        let body = ErrorBody {
            status: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

/// Build the application router
pub fn router(blog: Blog) -> Router {
    let state = Arc::new(ServerState { blog });

    Router::new()
        .route("/api/posts", get(list_handler))
        .route("/api/blog/:slug", get(detail_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let app = router(blog.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Serving posts from {:?}", blog.content_dir);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_handler(State(state): State<Arc<ServerState>>) -> Result<Json<Listing>, BlogError> {
    let posts = state.blog.list_posts().await?;
    Ok(Json(Listing { posts }))
}

async fn detail_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Result<Json<PostDetail>, BlogError> {
    let detail = state.blog.load_post(&slug).await?;
    Ok(Json(detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use std::fs;

    fn test_blog(dir: &std::path::Path) -> Blog {
        let posts = dir.join("posts");
        fs::create_dir_all(&posts).unwrap();
        fs::write(posts.join("a.md"), "---\ntitle: A\ndate: 2024-01-01\n---\nFirst\n").unwrap();
        fs::write(posts.join("b.md"), "---\ntitle: B\ndate: 2024-06-01\n---\nSecond\n").unwrap();
        Blog::new(dir).unwrap()
    }

    fn state(blog: Blog) -> State<Arc<ServerState>> {
        State(Arc::new(ServerState { blog }))
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_handler() {
        let dir = tempfile::tempdir().unwrap();
        let response = list_handler(state(test_blog(dir.path())))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["posts"][0]["path"], "b");
        assert_eq!(body["posts"][1]["path"], "a");
        assert_eq!(body["posts"][0]["meta"]["title"], "B");
    }

    #[tokio::test]
    async fn test_list_handler_enumeration_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blog = test_blog(dir.path());
        fs::write(blog.content_dir.join("broken.md"), "oops").unwrap();

        let response = list_handler(state(blog)).await.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["status"], 500);
    }

    #[tokio::test]
    async fn test_detail_handler_ok() {
        let dir = tempfile::tempdir().unwrap();
        let response = detail_handler(state(test_blog(dir.path())), Path("a".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["slug"], "a");
        assert_eq!(body["metadata"]["title"], "A");
        assert!(body["content"].as_str().unwrap().contains("First"));
    }

    #[tokio::test]
    async fn test_detail_handler_invalid_slug() {
        let dir = tempfile::tempdir().unwrap();
        let response = detail_handler(
            state(test_blog(dir.path())),
            Path("../secret".to_string()),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "Invalid slug");
    }

    #[tokio::test]
    async fn test_detail_handler_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let response = detail_handler(
            state(test_blog(dir.path())),
            Path("missing-post".to_string()),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["message"], "Post not found");
    }

    #[test]
    fn test_router_builds() {
        let dir = tempfile::tempdir().unwrap();
        let _ = router(test_blog(dir.path()));
    }
}
