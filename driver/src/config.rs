use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use kernel::KernelError;

use crate::env;
use crate::error::{ConvertError, DriverError};

static SERVER_HOST: &str = "SERVER_HOST";
static SERVER_PORT: &str = "SERVER_PORT";
static LOG_DIR: &str = "LOG_DIR";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_DIR: &str = "./logs/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub log_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::load(env).convert_error()
    }

    fn load(
        lookup: impl Fn(&str) -> Result<Option<String>, DriverError>,
    ) -> Result<Self, DriverError> {
        let host = lookup(SERVER_HOST)?
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse::<IpAddr>()?;
        let port = match lookup(SERVER_PORT)? {
            Some(port) => port.parse::<u16>()?,
            None => DEFAULT_PORT,
        };
        let log_dir = lookup(LOG_DIR)?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));

        Ok(Self {
            bind: SocketAddr::new(host, port),
            log_dir,
        })
    }
}
