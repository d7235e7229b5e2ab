//! TCP accept loop.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

use crate::config::ServeConfig;
use crate::error::{Result, ServeError};
use crate::handler::handle;
use crate::http::{MAX_HEAD_BYTES, Request, Response, StatusCode};

/// A bound server, ready to accept connections.
pub struct Server {
    listener: TcpListener,
    config: Arc<ServeConfig>,
}

impl Server {
    pub async fn bind(config: ServeConfig) -> Result<Self> {
        let address = config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServeError::Bind { address, source })?;
        Ok(Self {
            listener,
            config: Arc::new(config),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn config(&self) -> &ServeConfig {
        &self.config
    }

    /// Serves until `shutdown` completes. In-flight connections are left to
    /// finish on their own tasks.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let addr = self.local_addr()?;
        info!(
            %addr,
            web_root = %self.config.web_root.display(),
            artifact = %self.config.artifact_path.display(),
            "lineage server listening"
        );
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                () = &mut shutdown => {
                    info!("lineage server stopped");
                    return Ok(());
                }
                accepted = self.listener.accept() => match accepted {
                    Ok((socket, peer)) => {
                        let config = Arc::clone(&self.config);
                        tokio::spawn(async move {
                            if let Err(error) = serve_connection(socket, &config).await {
                                debug!(%peer, %error, "connection error");
                            }
                        });
                    }
                    Err(error) => warn!(%error, "failed to accept connection"),
                },
            }
        }
    }

    /// Serves forever.
    pub async fn run(self) -> Result<()> {
        self.run_until(std::future::pending()).await
    }
}

async fn read_head(socket: &mut TcpStream) -> std::io::Result<Vec<u8>> {
    let mut buf = [0u8; 1024];
    let mut head = Vec::new();
    loop {
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") || head.len() > MAX_HEAD_BYTES {
            break;
        }
    }
    Ok(head)
}

async fn serve_connection(mut socket: TcpStream, config: &ServeConfig) -> std::io::Result<()> {
    let Ok(head) = tokio::time::timeout(config.read_timeout(), read_head(&mut socket)).await else {
        debug!(timeout_ms = config.read_timeout_ms, "request head not received in time");
        let response = Response::error(StatusCode::REQUEST_TIMEOUT, "Request timed out");
        socket.write_all(&response.to_bytes(false)).await?;
        return socket.shutdown().await;
    };
    let head = head?;
    let (response, head_only) = match Request::parse(&head) {
        Some(request) => {
            let response = handle(config, &request).await;
            info!(
                method = %request.method,
                path = %request.path,
                status = response.status.as_u16(),
                bytes = response.body.len(),
                "request"
            );
            (response, request.is_head())
        }
        None => (
            Response::error(StatusCode::BAD_REQUEST, "Bad request syntax"),
            false,
        ),
    };
    socket.write_all(&response.to_bytes(head_only)).await?;
    socket.shutdown().await
}
