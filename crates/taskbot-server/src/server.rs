use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use taskbot_db::service::RobotService;
use tokio::sync::mpsc;

use crate::error::{ApiError, ServerError};
use crate::response::ApiResponse;
use crate::routes;

/// Requests waiting for the handler. The accept thread blocks once this fills.
const QUEUE_DEPTH: usize = 64;

struct Incoming {
    request: tiny_http::Request,
    method: String,
    url: String,
    body: String,
}

/// HTTP gateway over a shared `RobotService`.
///
/// `tiny_http::Server::recv` blocks, so accepting runs on a `spawn_blocking`
/// thread and hands each request to the async side, which serves them one
/// at a time in arrival order.
pub struct Server {
    http: Arc<tiny_http::Server>,
    service: Arc<RobotService>,
    stopping: Arc<AtomicBool>,
}

/// Stops a running [`Server`] from another task.
#[derive(Clone)]
pub struct ShutdownHandle {
    http: Arc<tiny_http::Server>,
    stopping: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.stopping.store(true, Ordering::SeqCst);
        self.http.unblock();
    }
}

impl Server {
    /// Bind to `addr` (`host:port`; port `0` picks a free one).
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Bind` if the address cannot be bound.
    pub fn bind(addr: &str, service: Arc<RobotService>) -> Result<Self, ServerError> {
        let http = tiny_http::Server::http(addr).map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            http: Arc::new(http),
            service,
            stopping: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The address actually bound, including the chosen port.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.http.server_addr().to_ip()
    }

    #[must_use]
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            http: Arc::clone(&self.http),
            stopping: Arc::clone(&self.stopping),
        }
    }

    /// Serve until [`ShutdownHandle::shutdown`] is called.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Join` if the accept thread panics.
    pub async fn run(self) -> Result<(), ServerError> {
        let (tx, mut rx) = mpsc::channel(QUEUE_DEPTH);
        let http = Arc::clone(&self.http);
        let stopping = Arc::clone(&self.stopping);
        let acceptor = tokio::task::spawn_blocking(move || accept_loop(&http, &stopping, &tx));

        if let Some(addr) = self.local_addr() {
            tracing::info!(%addr, "taskbot server listening");
        }

        while let Some(incoming) = rx.recv().await {
            self.respond(incoming).await;
        }

        acceptor
            .await
            .map_err(|e| ServerError::Join(e.to_string()))?;
        tracing::info!("taskbot server stopped");
        Ok(())
    }

    /// Serve until Ctrl-C.
    ///
    /// # Errors
    ///
    /// See [`Self::run`].
    pub async fn run_until_ctrl_c(self) -> Result<(), ServerError> {
        let handle = self.shutdown_handle();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("received Ctrl-C, shutting down"),
                Err(error) => tracing::warn!(%error, "cannot listen for Ctrl-C, shutting down"),
            }
            handle.shutdown();
        });
        self.run().await
    }

    async fn respond(&self, incoming: Incoming) {
        let Incoming {
            request,
            method,
            url,
            body,
        } = incoming;
        let response = routes::handle(&self.service, &method, &url, &body).await;
        if let Err(error) = request.respond(response.into_tiny()) {
            tracing::warn!(%error, %method, %url, "failed to write response");
        }
    }
}

/// Accept requests until the server is unblocked or the handler goes away.
fn accept_loop(http: &tiny_http::Server, stopping: &AtomicBool, tx: &mpsc::Sender<Incoming>) {
    loop {
        let mut request = match http.recv() {
            Ok(request) => request,
            Err(_) if stopping.load(Ordering::SeqCst) => break,
            Err(error) => {
                tracing::warn!(%error, "accept failed");
                continue;
            }
        };

        let mut body = String::new();
        if let Err(error) = request.as_reader().read_to_string(&mut body) {
            let response = ApiResponse::from(ApiError::bad_request(format!(
                "unreadable request body: {error}"
            )));
            let _ = request.respond(response.into_tiny());
            continue;
        }

        let incoming = Incoming {
            method: request.method().as_str().to_string(),
            url: request.url().to_string(),
            request,
            body,
        };
        if tx.blocking_send(incoming).is_err() {
            break;
        }
    }
}
