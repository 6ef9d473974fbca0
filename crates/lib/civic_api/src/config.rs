//! API server configuration.

/// Listener configuration for the API server.
///
/// The server binary fills it from `--host`/`BIND_HOST` and `--port`/`PORT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:8080").
    pub bind_addr: String,
}

impl ApiConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;

    pub fn new(host: &str, port: u16) -> Self {
        Self {
            bind_addr: format!("{host}:{port}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_8080() {
        let config = ApiConfig::new(ApiConfig::DEFAULT_HOST, ApiConfig::DEFAULT_PORT);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn new_joins_host_and_port() {
        assert_eq!(ApiConfig::new("127.0.0.1", 0).bind_addr, "127.0.0.1:0");
    }
}
