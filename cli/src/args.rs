use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use counterdex_engine::types::{DEFAULT_LEVEL, MAX_STAGE, MIN_STAGE};
use counterdex_engine::{
    EngineConfig, EstimatorKind, FieldState, RankVector, Stages, Type, TypeMatchup,
};

use crate::loader::ResourceLocations;
use crate::source::{FetchPolicy, ResourceSource};

/// Counter analysis over a usage pool
#[derive(Parser, Debug)]
#[command(name = "counterdex")]
#[command(about = "Rank every usage-pool candidate as a counter to one target")]
pub struct Args {
    /// Stat pool: file path or http(s) URL
    #[arg(long)]
    pub stats: ResourceSource,

    /// Usage pool: file path or http(s) URL
    #[arg(long)]
    pub usage: ResourceSource,

    /// Type table: file path or http(s) URL
    #[arg(long)]
    pub types: ResourceSource,

    /// Move dex: file path or http(s) URL
    #[arg(long)]
    pub moves: ResourceSource,

    /// Combatant to analyze
    #[arg(long)]
    pub target: String,

    /// Target's move; defaults to its first known move
    #[arg(long = "move")]
    pub move_name: Option<String>,

    /// sun, rain, sand, snow or clear
    #[arg(long, default_value = "clear")]
    pub weather: String,

    /// electric, grassy, misty, psychic or none
    #[arg(long, default_value = "none")]
    pub terrain: String,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true, value_parser = stage_parser())]
    pub meta_atk: i8,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true, value_parser = stage_parser())]
    pub meta_def: i8,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true, value_parser = stage_parser())]
    pub meta_spe: i8,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true, value_parser = stage_parser())]
    pub counter_atk: i8,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true, value_parser = stage_parser())]
    pub counter_def: i8,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true, value_parser = stage_parser())]
    pub counter_spe: i8,

    #[arg(long, value_enum, default_value_t = EstimatorArg::Calculator)]
    pub estimator: EstimatorArg,

    #[arg(long, default_value_t = DEFAULT_LEVEL)]
    pub level: u8,

    #[arg(long, value_enum, default_value_t = View::Both)]
    pub view: View,

    /// Only keep candidates sharing one of these types (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub types_filter: Vec<String>,

    /// Only keep candidates with this type matchup against the target
    #[arg(long, value_enum)]
    pub matchup: Option<MatchupArg>,

    /// Attempts per URL resource before giving up
    #[arg(long, default_value_t = 3)]
    pub fetch_attempts: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub fetch_timeout: u64,

    #[arg(long)]
    pub pretty: bool,
}

fn stage_parser() -> clap::builder::RangedI64ValueParser<i8> {
    clap::value_parser!(i8).range(i64::from(MIN_STAGE)..=i64::from(MAX_STAGE))
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorArg {
    Calculator,
    Formula,
}

impl From<EstimatorArg> for EstimatorKind {
    fn from(arg: EstimatorArg) -> Self {
        match arg {
            EstimatorArg::Calculator => EstimatorKind::Calculator,
            EstimatorArg::Formula => EstimatorKind::Formula,
        }
    }
}

/// Which result views the report carries
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Scatter,
    Heatmap,
    Both,
}

impl View {
    pub fn scatter(&self) -> bool {
        matches!(self, View::Scatter | View::Both)
    }

    pub fn heatmap(&self) -> bool {
        matches!(self, View::Heatmap | View::Both)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchupArg {
    Advantage,
    Neutral,
    Disadvantage,
}

impl From<MatchupArg> for TypeMatchup {
    fn from(arg: MatchupArg) -> Self {
        match arg {
            MatchupArg::Advantage => TypeMatchup::Advantage,
            MatchupArg::Neutral => TypeMatchup::Neutral,
            MatchupArg::Disadvantage => TypeMatchup::Disadvantage,
        }
    }
}

impl Args {
    pub fn locations(&self) -> ResourceLocations {
        ResourceLocations {
            stats: self.stats.clone(),
            usage: self.usage.clone(),
            types: self.types.clone(),
            moves: self.moves.clone(),
        }
    }

    pub fn fetch_policy(&self) -> FetchPolicy {
        FetchPolicy {
            max_attempts: self.fetch_attempts,
            timeout: Duration::from_secs(self.fetch_timeout),
            ..FetchPolicy::default()
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            level: self.level,
            estimator: self.estimator.into(),
            ..EngineConfig::default()
        }
    }

    pub fn field(&self) -> Result<FieldState> {
        FieldState::from_names(&self.weather, &self.terrain).context("Invalid field conditions")
    }

    pub fn ranks(&self) -> RankVector {
        RankVector::new(
            Stages {
                attack: self.meta_atk,
                defense: self.meta_def,
                speed: self.meta_spe,
            },
            Stages {
                attack: self.counter_atk,
                defense: self.counter_def,
                speed: self.counter_spe,
            },
        )
    }

    /// Parsed `--types-filter`; None when not given
    pub fn types_filter(&self) -> Result<Option<Vec<Type>>> {
        if self.types_filter.is_empty() {
            return Ok(None);
        }
        let types = self
            .types_filter
            .iter()
            .map(|t| Type::parse(t).with_context(|| format!("Invalid --types-filter entry '{t}'")))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(types))
    }
}
