use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use vinyl_telemetry::LogFormat;

pub const LISTEN_ADDR_ENV: &str = "VINYL_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "VINYL_GATEWAY_STORAGE_BACKEND";
pub const MONGODB_URI_ENV: &str = "VINYL_GATEWAY_MONGODB_URI";
pub const MONGODB_DATABASE_ENV: &str = "VINYL_GATEWAY_MONGODB_DATABASE";
pub const CACHE_BACKEND_ENV: &str = "VINYL_GATEWAY_CACHE_BACKEND";
pub const REDIS_URL_ENV: &str = "VINYL_GATEWAY_REDIS_URL";
pub const LOG_FORMAT_ENV: &str = "VINYL_GATEWAY_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017";
pub const DEFAULT_MONGODB_DATABASE: &str = "vinyl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "mongodb")]
    MongoDb,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::MongoDb => write!(f, "mongodb"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CacheBackendArg {
    #[value(name = "none")]
    None,
    #[value(name = "redis")]
    Redis,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for CacheBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheBackendArg::None => write!(f, "none"),
            CacheBackendArg::Redis => write!(f, "redis"),
            CacheBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "vinyl-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::MongoDb
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MONGODB_URI_ENV, default_value = DEFAULT_MONGODB_URI)]
    pub mongodb_uri: String,

    #[arg(long, env = MONGODB_DATABASE_ENV, default_value = DEFAULT_MONGODB_DATABASE)]
    pub mongodb_database: String,

    #[arg(
        long,
        env = CACHE_BACKEND_ENV,
        value_enum,
        default_value_t = CacheBackendArg::None
    )]
    pub cache: CacheBackendArg,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("cache", "redis"))]
    pub redis_url: Option<String>,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
