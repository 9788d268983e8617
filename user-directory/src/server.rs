use std::{future::Future, net::SocketAddr, sync::Arc};

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{routes, store::UserStore};

/// Serves the directory over HTTP on an already bound listener.
pub struct Server {
    listener: TcpListener,
    store: Arc<UserStore>,
}

impl Server {
    pub fn new(listener: TcpListener, store: Arc<UserStore>) -> Self {
        Self { listener, store }
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until `shutdown` resolves, then lets in-flight
    /// requests finish.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Server { listener, store } = self;
        let app = routes::router(Arc::clone(&store));

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!(users = store.len(), "server shutting down");
        Ok(())
    }

    pub async fn run_until_ctrl_c(self) -> Result<()> {
        self.run_until(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!(error = ?err, "failed to install ctrl-c handler");
            }
        })
        .await
    }
}
