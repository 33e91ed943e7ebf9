//! Static analytics data and the figures derived from it.

pub mod dataset;
pub mod summary;

pub use dataset::{
    ChartPoint, Dataset, Level, Metric, MetricStatus, PainPoint, Recommendation, Theme, Trend,
    TrendingInsight,
};
pub use summary::{
    metrics_summary, overview, pain_points_summary, percent, priority_matrix,
    recommendations_summary, themes_summary, trending_summary, Overview, PriorityMatrix,
};
