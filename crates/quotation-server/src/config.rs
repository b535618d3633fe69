use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_ADDR_VAR: &str = "QUOTATION_BIND_ADDR";
pub const OUTPUT_DIR_VAR: &str = "QUOTATION_OUTPUT_DIR";
pub const ASSET_DIR_VAR: &str = "QUOTATION_ASSET_DIR";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_OUTPUT_DIR: &str = "quotations";
const DEFAULT_ASSET_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Generated PDFs land here; created at startup if missing.
    pub output_dir: PathBuf,
    /// Holds `letterhead.jpg` and `stamp.png`.
    pub asset_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid {BIND_ADDR_VAR} {bind:?}: {e}"))?;

        Ok(Self {
            bind_addr,
            output_dir: lookup(OUTPUT_DIR_VAR)
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
                .into(),
            asset_dir: lookup(ASSET_DIR_VAR)
                .unwrap_or_else(|| DEFAULT_ASSET_DIR.to_string())
                .into(),
        })
    }
}
