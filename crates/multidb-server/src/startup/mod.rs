//! Server startup: logging, HTTP binding, graceful shutdown

pub mod http;
pub mod logging;
pub mod shutdown;

pub use http::server;
pub use logging::{LoggingConfig, LoggingGuard, init_logging};
pub use shutdown::{GracefulShutdown, ShutdownSignal, wait_for_shutdown_signal};
