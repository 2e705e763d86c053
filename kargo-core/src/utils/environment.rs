use std::sync::Arc;

/// A logger type which is called with various information.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` with the given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates an instance of `Environment` which swallows all log messages.
    pub fn silent() -> Self {
        Self { logger: Arc::new(|_| {}) }
    }

    /// Creates an instance of `Environment` which prints log messages with the given prefix.
    pub fn with_prefix(prefix: &str) -> Self {
        let prefix = prefix.to_string();
        Self { logger: Arc::new(move |msg| println!("{prefix}{msg}")) }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { logger: Arc::new(|msg| println!("{msg}")) }
    }
}
