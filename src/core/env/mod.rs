mod store;

pub use store::EnvStore;

#[derive(Debug)]
pub enum EnvError {
    StoreUninitialized,
    InvalidValue(&'static str),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::StoreUninitialized => write!(f, "Environment store is not initialized"),
            EnvError::InvalidValue(val) => write!(f, "Invalid value: {}", val),
        }
    }
}

impl std::error::Error for EnvError {}
