use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

/// 既定の待ち受けホスト
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// 既定の待ち受けポート
pub const DEFAULT_PORT: u16 = 3000;
/// RUST_LOG未設定時のログフィルタ
pub const DEFAULT_LOG_FILTER: &str = "book_catalog=debug,tower_http=debug,axum=trace";

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid HOST: {0}")]
    InvalidHost(String),

    #[error("Invalid PORT: {0}")]
    InvalidPort(String),
}

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// 環境変数（HOST, PORT）から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    /// 値を与えて設定を組み立てる（未指定は既定値）
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host.parse().map_err(|_| ConfigError::InvalidHost(host))?;

        let port = match port {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
