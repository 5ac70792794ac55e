//! Full-run orchestration.

use chrono::{Duration, Utc};
use spoor_core::config::{AnalysisConfig, ExportConfig};
use spoor_core::constants::COMMUNITY_MIN_NODES;
use spoor_core::errors::RunError;
use spoor_core::model::{CommunityBreakdown, NetworkReport};
use spoor_core::traits::PropagationStore;
use spoor_core::types::collections::FxHashSet;
use tracing::info;

use crate::centrality::find_superspreaders;
use crate::community::detect_communities;
use crate::coordination::detect_coordinated_bursts;
use crate::export;
use crate::graph::{build_content_graph, build_source_graph, ContentGraph, SourceGraph};
use crate::patterns::propagation_patterns;
use crate::stats::network_stats;

/// Runs the full analysis pipeline over a propagation store.
///
/// The analyzer owns its graphs and rebuilds both at the start of every
/// run, so one instance serves one run at a time; concurrent runs each
/// construct their own analyzer (see `BatchRunner`). The graphs stay
/// accessible after a run for callers that want to inspect more than
/// the report.
pub struct NetworkAnalyzer<S> {
    store: S,
    analysis: AnalysisConfig,
    export: ExportConfig,
    content_graph: ContentGraph,
    source_graph: SourceGraph,
}

impl<S: PropagationStore> NetworkAnalyzer<S> {
    pub fn new(store: S, analysis: AnalysisConfig, export: ExportConfig) -> Self {
        Self {
            store,
            analysis,
            export,
            content_graph: ContentGraph::new(),
            source_graph: SourceGraph::new(),
        }
    }

    /// Content graph from the most recent run; empty before the first.
    pub fn content_graph(&self) -> &ContentGraph {
        &self.content_graph
    }

    /// Source graph from the most recent run; empty before the first.
    pub fn source_graph(&self) -> &SourceGraph {
        &self.source_graph
    }

    /// Run every stage over the configured lookback window and assemble
    /// the report.
    ///
    /// Store and export failures abort the run; metric fallbacks (such
    /// as PageRank failing to converge) are absorbed by the stages and
    /// only degrade their own numbers. Communities are only computed
    /// once the graph outgrows a trivial size, and the export only runs
    /// for a non-empty graph.
    pub fn run_full_analysis(&mut self) -> Result<NetworkReport, RunError> {
        let started = Utc::now();
        let since = started - Duration::days(self.analysis.lookback_days);
        info!(
            lookback_days = self.analysis.lookback_days,
            "starting network analysis"
        );

        let links = self.store.list_links_since(since)?;
        let sources = self.store.list_active_sources()?;

        self.content_graph = build_content_graph(&links, self.analysis.min_similarity);
        self.source_graph = build_source_graph(&sources, &links);

        let superspreaders =
            find_superspreaders(&self.source_graph, self.analysis.top_superspreaders);

        let communities = if self.source_graph.node_count() > COMMUNITY_MIN_NODES {
            let partition = detect_communities(&self.source_graph);
            let count = partition.values().collect::<FxHashSet<_>>().len();
            Some(CommunityBreakdown { count, partition })
        } else {
            None
        };
        let community_count = communities.as_ref().map_or(0, |c| c.count);

        let stats = network_stats(&self.source_graph, community_count);
        let patterns = propagation_patterns(&links);

        let content = self.store.list_published_since(since)?;
        let coordinated = detect_coordinated_bursts(
            &content,
            self.analysis.coordination_window_secs,
            self.analysis.coordination_min_sources,
        );

        let export_path = if self.export.enabled && self.source_graph.node_count() > 0 {
            let dir = self.export.directory.join("graphs");
            Some(export::export_source_graph(&self.source_graph, &dir)?)
        } else {
            None
        };

        info!(
            nodes = stats.node_count,
            edges = stats.edge_count,
            superspreaders = superspreaders.len(),
            bursts = coordinated.len(),
            "network analysis complete"
        );

        Ok(NetworkReport {
            generated_at: started,
            period_days: self.analysis.lookback_days,
            stats,
            superspreaders,
            propagation_patterns: patterns,
            coordinated_behavior: coordinated,
            communities,
            export_path,
        })
    }
}
