use counterdex_data::{
    ResourceError, ResourceKind, parse_move_dex, parse_stat_pool, parse_type_table,
    parse_usage_pool,
};
use counterdex_engine::Tables;
use tracing::info;

use crate::source::{FetchPolicy, ResourceSource};

/// Locations of the four required resources
#[derive(Debug, Clone)]
pub struct ResourceLocations {
    pub stats: ResourceSource,
    pub usage: ResourceSource,
    pub types: ResourceSource,
    pub moves: ResourceSource,
}

/// Fetches and parses the static resources
pub struct Loader {
    client: reqwest::Client,
    policy: FetchPolicy,
}

impl Loader {
    pub fn new(policy: FetchPolicy) -> Self {
        Self {
            client: reqwest::Client::new(),
            policy,
        }
    }

    /// Fetch all four resources concurrently and build the tables
    ///
    /// The first failure is returned; nothing is computed without every
    /// resource present.
    pub async fn load(&self, locations: &ResourceLocations) -> Result<Tables, ResourceError> {
        let (stats, usage, types, moves) = tokio::try_join!(
            self.fetch(&locations.stats, ResourceKind::StatPool),
            self.fetch(&locations.usage, ResourceKind::UsagePool),
            self.fetch(&locations.types, ResourceKind::TypeTable),
            self.fetch(&locations.moves, ResourceKind::MoveDex),
        )?;

        let stat_pool = parse_stat_pool(&stats)?;
        let usage_pool = parse_usage_pool(&usage)?;
        let type_table = parse_type_table(&types)?;
        let move_dex = parse_move_dex(&moves)?;

        info!(
            stats = stat_pool.len(),
            usage = usage_pool.len(),
            moves = move_dex.len(),
            "Resources loaded"
        );

        Tables::new(stat_pool, usage_pool, &type_table, move_dex)
    }

    async fn fetch(&self, source: &ResourceSource, kind: ResourceKind) -> Result<String, ResourceError> {
        source.fetch(kind, &self.client, &self.policy).await
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(FetchPolicy::default())
    }
}
