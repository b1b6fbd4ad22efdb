//! BDD test world for the portal server

use cucumber::World;
use portal::config::Config;
use portal::env::MapEnv;

#[derive(Debug, Default, World)]
pub struct PortalWorld {
    pub config: Config,
    pub env: MapEnv,
    pub response_status: Option<u16>,
    pub response_location: Option<String>,
    pub response_body: Option<String>,
}
