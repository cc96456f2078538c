use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("store error: {0}")]
    Store(#[from] agora_store::StoreError),

    #[error("session error: {0}")]
    Session(#[from] agora_sessions::SessionError),

    #[error("election error: {0}")]
    Election(#[from] agora_elections::ElectionError),

    #[error("registry error: {0}")]
    Registry(#[from] agora_registry::RegistryError),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
