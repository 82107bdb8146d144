//! JSON report printed for one analysis

use counterdex_engine::query::{immunities, resistances, weaknesses};
use counterdex_engine::types::UsageInfo;
use counterdex_engine::{
    AnalysisSession, CounterResult, EstimatorKind, FieldState, Heatmap, Move, RankVector,
    Snapshot, Type, TypeMatchup, filter_by_matchup, filter_by_types,
};
use serde::Serialize;

use crate::args::View;

/// Result narrowing and view selection
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub view: View,
    pub types_filter: Option<Vec<Type>>,
    pub matchup: Option<TypeMatchup>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            view: View::Both,
            types_filter: None,
            matchup: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSummary<'a> {
    pub name: &'a str,
    pub types: &'a [Type],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<UsageInfo>,
    pub weaknesses: Vec<Type>,
    pub resistances: Vec<Type>,
    pub immunities: Vec<Type>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapView {
    pub labels: Vec<String>,
    /// counts[y][x]
    pub counts: Vec<Vec<u32>>,
    pub intensity: Vec<Vec<f64>>,
    pub max_count: u32,
    pub total: u32,
}

impl From<&Heatmap> for HeatmapView {
    fn from(heatmap: &Heatmap) -> Self {
        Self {
            labels: heatmap.labels(),
            counts: heatmap.rows().to_vec(),
            intensity: heatmap.intensities(),
            max_count: heatmap.max_count(),
            total: heatmap.total(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub generation: u64,
    pub target: TargetSummary<'a>,
    #[serde(rename = "move")]
    pub mv: &'a Move,
    pub field: FieldState,
    pub ranks: RankVector,
    pub estimator: EstimatorKind,
    /// Candidates before filtering
    pub candidates: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scatter: Option<Vec<&'a CounterResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap: Option<HeatmapView>,
    /// Usage-pool names left out of the analysis
    pub excluded: Vec<&'a str>,
}

impl<'a> Report<'a> {
    pub fn build(session: &'a AnalysisSession, snapshot: &'a Snapshot, options: &ReportOptions) -> Self {
        let chart = session.tables().chart();
        let target = &snapshot.target;

        let mut kept: Vec<&CounterResult> = snapshot.results.iter().collect();
        if let Some(types) = &options.types_filter {
            kept = filter_by_types(kept, types);
        }
        if let Some(matchup) = options.matchup {
            kept = filter_by_matchup(kept, &target.types, matchup, chart);
        }

        let heatmap = options
            .view
            .heatmap()
            .then(|| HeatmapView::from(&Heatmap::bin(kept.iter().copied(), session.config().resolution)));

        Self {
            generation: snapshot.generation,
            target: TargetSummary {
                name: &target.name,
                types: &target.types,
                usage: target.usage,
                weaknesses: weaknesses(&target.types, chart),
                resistances: resistances(&target.types, chart),
                immunities: immunities(&target.types, chart),
            },
            mv: &snapshot.mv,
            field: snapshot.field,
            ranks: snapshot.ranks,
            estimator: session.config().estimator,
            candidates: snapshot.results.len(),
            scatter: options.view.scatter().then_some(kept),
            heatmap,
            excluded: session
                .pool()
                .excluded()
                .iter()
                .map(|e| e.name.as_str())
                .collect(),
        }
    }
}
