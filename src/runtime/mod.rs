//! Where the current process is running.
//!
//! Detection happens once, on first access, and never changes afterwards.

use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Runtime {
    /// Compiled for a browser host.
    Client,
    Server,
}

impl Runtime {
    fn detect() -> Self {
        if cfg!(all(target_arch = "wasm32", not(target_os = "wasi"))) {
            Runtime::Client
        } else {
            Runtime::Server
        }
    }

    pub fn is_client(self) -> bool {
        self == Runtime::Client
    }

    pub fn is_server(self) -> bool {
        !self.is_client()
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runtime::Client => f.write_str("client"),
            Runtime::Server => f.write_str("server"),
        }
    }
}

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Returns the runtime detected for this process.
pub fn runtime() -> Runtime {
    *RUNTIME.get_or_init(|| {
        let detected = Runtime::detect();
        tracing::debug!(runtime = %detected, "detected execution environment");
        detected
    })
}

/// `true` when running inside a browser host.
pub fn is_client() -> bool {
    runtime().is_client()
}

/// Always the opposite of [`is_client`].
pub fn is_server() -> bool {
    !is_client()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_is_negation_of_client() {
        assert_eq!(is_server(), !is_client());
        assert_eq!(runtime().is_server(), !runtime().is_client());
    }

    #[test]
    fn test_runtime_is_stable() {
        assert_eq!(runtime(), runtime());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_build_is_server() {
        assert_eq!(runtime(), Runtime::Server);
        assert!(is_server());
    }

    #[test]
    fn test_display() {
        assert_eq!(Runtime::Client.to_string(), "client");
        assert_eq!(Runtime::Server.to_string(), "server");
    }
}
