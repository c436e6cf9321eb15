use super::*;

#[test]
fn guide_defaults_to_overview_with_nothing_expanded() {
    let state = GuideState::default();
    assert_eq!(state.tab, GuideTab::Overview);
    assert_eq!(state.open_metric, None);
}

#[test]
fn tab_labels_in_display_order() {
    let labels: Vec<_> = GuideTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(
        labels,
        ["Overview", "Upload Process", "Analysis Metrics", "AI Embeddings", "Complete Workflow"]
    );
}

#[test]
fn toggle_metric_is_single_open() {
    let mut state = GuideState::default();
    state.toggle_metric("sentiment");
    state.toggle_metric("engagement");
    assert!(state.is_metric_open("engagement"));
    assert!(!state.is_metric_open("sentiment"));
}

#[test]
fn toggle_open_metric_collapses_it() {
    let mut state = GuideState::default();
    state.toggle_metric("sentiment");
    state.toggle_metric("sentiment");
    assert_eq!(state.open_metric, None);
}

#[test]
fn select_tab_keeps_accordion_state() {
    let mut state = GuideState::default();
    state.toggle_metric("objections");
    state.select_tab(GuideTab::Workflow);
    assert_eq!(state.tab, GuideTab::Workflow);
    assert!(state.is_metric_open("objections"));
}
