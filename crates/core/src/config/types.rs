use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub columns: ColumnMapping,
    #[serde(default)]
    pub line: LineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Upload limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// Largest accepted spreadsheet, in bytes.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
        }
    }
}

fn default_max_bytes() -> usize {
    20 * 1024 * 1024
}

/// 0-based spreadsheet column positions for each order field.
///
/// Position is authoritative; header labels are never consulted.
/// The defaults match the production export (columns Z, D, E, L, P, AA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColumnMapping {
    #[serde(default = "default_id_column")]
    pub id: usize,
    #[serde(default = "default_client_column")]
    pub client: usize,
    #[serde(default = "default_article_column")]
    pub article: usize,
    #[serde(default = "default_color_column")]
    pub color: usize,
    #[serde(default = "default_finishing_column")]
    pub finishing: usize,
    #[serde(default = "default_minutes_column")]
    pub minutes: usize,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            id: default_id_column(),
            client: default_client_column(),
            article: default_article_column(),
            color: default_color_column(),
            finishing: default_finishing_column(),
            minutes: default_minutes_column(),
        }
    }
}

impl ColumnMapping {
    /// Column positions paired with their field names.
    pub fn positions(&self) -> [(&'static str, usize); 6] {
        [
            ("id", self.id),
            ("client", self.client),
            ("article", self.article),
            ("color", self.color),
            ("finishing", self.finishing),
            ("minutes", self.minutes),
        ]
    }

    /// Minimum number of columns a row needs to reach every mapped field.
    pub fn width(&self) -> usize {
        self.positions().iter().map(|(_, c)| c + 1).max().unwrap_or(0)
    }
}

fn default_id_column() -> usize {
    25
}

fn default_client_column() -> usize {
    3
}

fn default_article_column() -> usize {
    4
}

fn default_color_column() -> usize {
    11
}

fn default_finishing_column() -> usize {
    15
}

fn default_minutes_column() -> usize {
    26
}

/// Production line parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LineConfig {
    /// Throughput used to convert workload minutes into meters.
    ///
    /// 120 000 m/day over two 8-hour shifts (960 minutes).
    #[serde(default = "default_meters_per_minute")]
    pub meters_per_minute: f64,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            meters_per_minute: default_meters_per_minute(),
        }
    }
}

fn default_meters_per_minute() -> f64 {
    125.0
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
