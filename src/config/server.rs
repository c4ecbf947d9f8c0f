use std::net::{ IpAddr, SocketAddr };

use super::database::{ parse_env, ConfigError };

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let host: String = parse_env("HOST", DEFAULT_HOST.to_string())?;
        let host = host
            .parse()
            .map_err(|e| ConfigError::Config(format!("Failed to parse HOST: {}", e)))?;

        Ok(Self {
            host,
            port: parse_env("PORT", DEFAULT_PORT)?,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
