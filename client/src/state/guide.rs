//! Guide page view state: the selected tab and the open metric.
//!
//! The metrics accordion is single-open and collapsible: opening one item
//! closes the others, and toggling the open item closes it.

#[cfg(test)]
#[path = "guide_test.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuideTab {
    #[default]
    Overview,
    Upload,
    Metrics,
    Embeddings,
    Workflow,
}

impl GuideTab {
    pub const ALL: [Self; 5] = [Self::Overview, Self::Upload, Self::Metrics, Self::Embeddings, Self::Workflow];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Upload => "Upload Process",
            Self::Metrics => "Analysis Metrics",
            Self::Embeddings => "AI Embeddings",
            Self::Workflow => "Complete Workflow",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuideState {
    pub tab: GuideTab,
    pub open_metric: Option<&'static str>,
}

impl GuideState {
    pub fn select_tab(&mut self, tab: GuideTab) {
        self.tab = tab;
    }

    pub fn toggle_metric(&mut self, key: &'static str) {
        self.open_metric = if self.open_metric == Some(key) { None } else { Some(key) };
    }

    #[must_use]
    pub fn is_metric_open(&self, key: &str) -> bool {
        self.open_metric == Some(key)
    }
}
