use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Waitlist storage could not be prepared. Check WAITLIST_FILE and directory permissions.")]
    StorageInit(#[source] std::io::Error),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
