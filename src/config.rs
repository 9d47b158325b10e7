use std::{env, net::SocketAddr};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            warn!("DATABASE_URL not set, data endpoints will fail");
            String::new()
        });

        Self {
            database_url,
            port: parse_port(env::var("PORT").ok().as_deref()),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    match value {
        None => DEFAULT_PORT,
        Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|err| {
            warn!("invalid PORT value {raw:?}: {err}, using {DEFAULT_PORT}");
            DEFAULT_PORT
        }),
    }
}
