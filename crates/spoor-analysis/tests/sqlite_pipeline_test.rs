//! Analysis runs backed by the SQLite store.
//!
//! Timestamps are truncated to whole seconds up front; the store keeps
//! unix seconds, and the assertions compare round-tripped values.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use spoor_analysis::NetworkAnalyzer;
use spoor_core::config::{AnalysisConfig, ExportConfig};
use spoor_core::model::{ContentItem, PropagationKind, PropagationLink, Source, SourceKind};
use spoor_storage::SqliteStore;
use tempfile::TempDir;
use uuid::Uuid;

fn source(name: &str, kind: SourceKind) -> Source {
    Source {
        id: Uuid::new_v4(),
        name: name.to_string(),
        kind,
        language: None,
        is_doppelganger: false,
        is_amplifier: false,
        is_active: true,
    }
}

fn content(owner: Option<Uuid>, published_at: Option<DateTime<Utc>>) -> ContentItem {
    ContentItem {
        id: Uuid::new_v4(),
        source_id: owner,
        published_at,
        language: None,
    }
}

fn link(
    source_content: Uuid,
    target_content: Uuid,
    kind: PropagationKind,
    recorded_at: DateTime<Utc>,
) -> PropagationLink {
    PropagationLink {
        source_content_id: source_content,
        target_content_id: target_content,
        kind,
        similarity: None,
        mutated: false,
        time_delta_secs: Some(300),
        source_owner: None,
        target_owner: None,
        recorded_at,
    }
}

fn no_export() -> ExportConfig {
    ExportConfig {
        enabled: false,
        ..ExportConfig::default()
    }
}

#[test]
fn test_full_run_over_sqlite_store() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("spoor.db");
    let now = Utc::now().trunc_subsecs(0);

    let a = source("origin", SourceKind::Telegram);
    let b = source("mirror", SourceKind::Domain);
    let c = source("echo", SourceKind::Social);
    let t0 = now - Duration::hours(1);
    let item_a = content(Some(a.id), Some(t0));
    let item_b = content(Some(b.id), Some(t0 + Duration::seconds(30)));
    let item_c = content(Some(c.id), Some(t0 + Duration::seconds(60)));

    let writer = SqliteStore::open(&db).unwrap();
    for s in [&a, &b, &c] {
        writer.insert_source(s).unwrap();
    }
    for item in [&item_a, &item_b, &item_c] {
        writer.insert_content(item).unwrap();
    }
    writer
        .insert_link(&link(item_a.id, item_b.id, PropagationKind::Forward, now))
        .unwrap();
    writer
        .insert_link(&link(item_a.id, item_c.id, PropagationKind::Repost, now))
        .unwrap();
    drop(writer);

    // A fresh connection sees everything the writer committed.
    let reader = SqliteStore::open(&db).unwrap();
    let mut analyzer = NetworkAnalyzer::new(reader, AnalysisConfig::default(), no_export());
    let report = analyzer.run_full_analysis().unwrap();

    assert_eq!(report.stats.node_count, 3);
    assert_eq!(report.stats.edge_count, 2);
    assert!(report.stats.is_connected);
    assert_eq!(report.stats.community_count, 1);

    assert_eq!(report.superspreaders.len(), 3);
    let origin = report
        .superspreaders
        .iter()
        .find(|s| s.id == a.id)
        .expect("origin ranked");
    assert_eq!(origin.out_degree, 2);
    assert_eq!(origin.category, "telegram");

    assert_eq!(report.propagation_patterns.total, 2);
    assert_eq!(report.propagation_patterns.by_kind.get("forward"), Some(&1));
    assert_eq!(report.propagation_patterns.by_kind.get("repost"), Some(&1));

    assert_eq!(report.coordinated_behavior.len(), 1);
    let burst = &report.coordinated_behavior[0];
    assert_eq!(burst.timestamp, t0);
    assert_eq!(burst.content_count, 3);
    assert_eq!(burst.unique_sources, 3);
}

#[test]
fn test_orphan_links_stay_out_of_the_source_graph() {
    let store = SqliteStore::open_in_memory().unwrap();
    let now = Utc::now().trunc_subsecs(0);

    let a = source("collector", SourceKind::Media);
    let item_a = content(Some(a.id), None);
    store.insert_source(&a).unwrap();
    store.insert_content(&item_a).unwrap();
    // Target content was never collected, so its owner is unknown.
    store
        .insert_link(&link(item_a.id, Uuid::new_v4(), PropagationKind::Link, now))
        .unwrap();

    let mut analyzer = NetworkAnalyzer::new(store, AnalysisConfig::default(), no_export());
    analyzer.run_full_analysis().unwrap();

    assert_eq!(analyzer.source_graph().node_count(), 1);
    assert_eq!(analyzer.source_graph().edge_count(), 0);
    // The content graph tracks the link either way.
    assert_eq!(analyzer.content_graph().node_count(), 2);
    assert_eq!(analyzer.content_graph().edge_count(), 1);
}

#[test]
fn test_lookback_window_filters_old_links() {
    let store = SqliteStore::open_in_memory().unwrap();
    let now = Utc::now().trunc_subsecs(0);

    let a = source("origin", SourceKind::Telegram);
    let b = source("mirror", SourceKind::Domain);
    let item_a = content(Some(a.id), None);
    let item_b = content(Some(b.id), None);
    store.insert_source(&a).unwrap();
    store.insert_source(&b).unwrap();
    store.insert_content(&item_a).unwrap();
    store.insert_content(&item_b).unwrap();
    store
        .insert_link(&link(
            item_a.id,
            item_b.id,
            PropagationKind::Forward,
            now - Duration::days(40),
        ))
        .unwrap();
    store
        .insert_link(&link(
            item_a.id,
            item_b.id,
            PropagationKind::Forward,
            now - Duration::days(1),
        ))
        .unwrap();

    let mut analyzer = NetworkAnalyzer::new(store, AnalysisConfig::default(), no_export());
    let report = analyzer.run_full_analysis().unwrap();

    // Only the link inside the 30-day window counts.
    assert_eq!(report.propagation_patterns.total, 1);
    assert_eq!(analyzer.source_graph().edge_weight(a.id, b.id), Some(1));
}

#[test]
fn test_inactive_sources_left_out_of_the_graph() {
    let store = SqliteStore::open_in_memory().unwrap();

    let active = source("live", SourceKind::Social);
    let mut dormant = source("dormant", SourceKind::Social);
    dormant.is_active = false;
    store.insert_source(&active).unwrap();
    store.insert_source(&dormant).unwrap();

    let mut analyzer = NetworkAnalyzer::new(store, AnalysisConfig::default(), no_export());
    let report = analyzer.run_full_analysis().unwrap();

    assert_eq!(report.stats.node_count, 1);
    assert!(analyzer.source_graph().index_of(active.id).is_some());
    assert!(analyzer.source_graph().index_of(dormant.id).is_none());
}
