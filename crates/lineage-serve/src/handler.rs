//! Request routing: the JSON artifact route and static files.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use serde::Deserialize;

use crate::config::ServeConfig;
use crate::http::{Method, Request, Response, StatusCode};

const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Answers a single request.
pub async fn handle(config: &ServeConfig, request: &Request) -> Response {
    if let Method::Other(method) = &request.method {
        return Response::error(
            StatusCode::NOT_IMPLEMENTED,
            format!("Unsupported method ({method:?})"),
        );
    }
    if request.path == config.artifact_route {
        return serve_artifact(&config.artifact_path).await;
    }
    serve_static(&config.web_root, &request.path).await
}

/// Re-encodes the artifact after validating it parses as JSON.
async fn serve_artifact(path: &Path) -> Response {
    let file_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Response::error(
                StatusCode::NOT_FOUND,
                format!("File {file_name} not found"),
            );
        }
        Err(e) => return artifact_failure(&e),
    };
    let value = match parse_artifact(&bytes) {
        Ok(value) => value,
        Err(e) => return artifact_failure(&e),
    };
    let body = match serde_json::to_vec_pretty(&value) {
        Ok(body) => body,
        Err(e) => return artifact_failure(&e),
    };
    Response::new(StatusCode::OK, "application/json", body)
        .with_header("Access-Control-Allow-Origin", "*")
        .with_header("Access-Control-Allow-Methods", "GET")
        .with_header("Access-Control-Allow-Headers", "Content-Type")
}

/// Parses without serde_json's nesting limit: every generation adds two
/// levels, and tall families are valid artifacts.
fn parse_artifact(bytes: &[u8]) -> serde_json::Result<serde_json::Value> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    deserializer.disable_recursion_limit();
    let value = serde_json::Value::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

fn artifact_failure(error: &dyn std::fmt::Display) -> Response {
    tracing::error!(%error, "failed to load family tree artifact");
    Response::error(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error reading JSON file: {error}"),
    )
}

async fn serve_static(web_root: &Path, request_path: &str) -> Response {
    let Some(relative) = resolve_relative(request_path) else {
        return Response::error(StatusCode::NOT_FOUND, "File not found");
    };
    let mut target = web_root.join(&relative);

    let Ok(metadata) = tokio::fs::metadata(&target).await else {
        return Response::error(StatusCode::NOT_FOUND, "File not found");
    };
    if metadata.is_dir() {
        if !request_path.ends_with('/') {
            return Response::new(StatusCode::MOVED_PERMANENTLY, "text/plain; charset=utf-8", "")
                .with_header("Location", format!("{request_path}/"));
        }
        let Some(index) = find_index(&target).await else {
            return Response::error(StatusCode::NOT_FOUND, "No index file in directory");
        };
        target = index;
    }

    match tokio::fs::read(&target).await {
        Ok(body) => {
            let mime = mime_guess::from_path(&target).first_or_octet_stream();
            Response::new(StatusCode::OK, mime.as_ref(), body)
        }
        Err(_) => Response::error(StatusCode::NOT_FOUND, "File not found"),
    }
}

async fn find_index(dir: &Path) -> Option<PathBuf> {
    for name in INDEX_FILES {
        let candidate = dir.join(name);
        if tokio::fs::metadata(&candidate)
            .await
            .is_ok_and(|meta| meta.is_file())
        {
            return Some(candidate);
        }
    }
    None
}

/// Maps a URL path onto a relative filesystem path inside the web root.
///
/// Returns `None` for undecodable paths or any attempt to climb above the
/// root.
fn resolve_relative(request_path: &str) -> Option<PathBuf> {
    let decoded: Cow<'_, str> = percent_decode_str(request_path).decode_utf8().ok()?;
    let mut relative = PathBuf::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return None,
            _ if segment.contains('\\') || segment.contains('\0') => return None,
            _ => relative.push(segment),
        }
    }
    Some(relative)
}
