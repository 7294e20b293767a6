use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr = match env::var("SKILLSLAB_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::BadRequest(format!("SKILLSLAB_ADDR is not a socket address: {raw}")))?,
            Err(_) => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let data_dir = env::var("SKILLSLAB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        Ok(Self { bind_addr, data_dir })
    }
}
