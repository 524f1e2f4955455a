use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "BASELINE_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "BASELINE_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "BASELINE_MYSQL_DSN";
pub const TABLE_NAME_ENV: &str = "BASELINE_USERS_TABLE";
pub const ALLOWED_ORIGIN_ENV: &str = "BASELINE_ALLOWED_ORIGIN";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_TABLE_NAME: &str = "user_profiles";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "baseline-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    #[arg(long, env = TABLE_NAME_ENV, default_value = DEFAULT_TABLE_NAME)]
    pub table_name: String,

    #[arg(long, env = ALLOWED_ORIGIN_ENV, default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub allowed_origin: String,
}
