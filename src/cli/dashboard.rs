//! Plain-text renderings of the dashboard screens.

use std::fmt::Write as _;
use std::str::FromStr;

use clap::ValueEnum;

use crate::insights::summary::{
    metrics_summary, overview, pain_points_summary, priority_matrix, recommendations_summary,
    themes_summary, trending_summary,
};
use crate::insights::{Dataset, Level, MetricStatus, Recommendation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DashboardSection {
    Overview,
    Metrics,
    PainPoints,
    Trending,
    Recommendations,
    Themes,
}

impl FromStr for DashboardSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true).map_err(|_| {
            format!(
                "Unknown dashboard section: {s}. Expected one of: overview, metrics, pain-points, trending, recommendations, themes"
            )
        })
    }
}

pub fn render_section(dataset: &Dataset, section: DashboardSection) -> String {
    match section {
        DashboardSection::Overview => render_overview(dataset),
        DashboardSection::Metrics => render_metrics(dataset),
        DashboardSection::PainPoints => render_pain_points(dataset),
        DashboardSection::Trending => render_trending(dataset),
        DashboardSection::Recommendations => render_recommendations(dataset),
        DashboardSection::Themes => render_themes(dataset),
    }
}

pub fn show_dashboard(section: Option<DashboardSection>) {
    let dataset = Dataset::builtin();
    println!(
        "{}",
        render_section(&dataset, section.unwrap_or(DashboardSection::Overview))
    );
}

fn render_overview(dataset: &Dataset) -> String {
    let overview = overview(dataset);
    let mut out = String::from("Dashboard overview");
    let _ = write!(
        out,
        "\n  Metrics: {} tracked ({} on track, {} need attention, {} critical)",
        overview.metrics.total,
        overview.metrics.good,
        overview.metrics.warning,
        overview.metrics.critical
    );
    let _ = write!(
        out,
        "\n  Pain points: {} complaints across {} categories ({} high severity)",
        overview.pain_points.total_complaints,
        overview.pain_points.categories,
        overview.pain_points.severity_count(Level::High)
    );
    let _ = write!(
        out,
        "\n  Trending: {} insights, average relevance {}% ({} highly relevant)",
        overview.trending.total,
        overview.trending.average_relevance,
        overview.trending.high_relevance
    );
    let _ = write!(
        out,
        "\n  Recommendations: {} total, {} high confidence, {} quick wins",
        overview.recommendations.total,
        overview.recommendations.high_confidence,
        overview.recommendations.quick_wins
    );
    let _ = write!(
        out,
        "\n  Themes: {} to investigate, {} data points",
        overview.themes.total, overview.themes.total_data_points
    );
    out
}

fn render_metrics(dataset: &Dataset) -> String {
    let summary = metrics_summary(&dataset.metrics);
    let mut out = String::from("Key metrics");
    for metric in &dataset.metrics {
        let _ = write!(
            out,
            "\n  {} {}: {} / {} ({}% of target, {:+}%) [{}]",
            metric.trend.arrow(),
            metric.name,
            metric.value,
            metric.target,
            metric.attainment_percent(),
            metric.change_percent,
            metric.status.label()
        );
    }
    out.push_str("\n\n  Status distribution:");
    for status in MetricStatus::ALL {
        let _ = write!(
            out,
            "\n    {}: {} ({}%)",
            status.label(),
            summary.by_status.get(status.label()).copied().unwrap_or(0),
            summary.share_percent(status)
        );
    }
    out
}

fn render_pain_points(dataset: &Dataset) -> String {
    let summary = pain_points_summary(dataset);
    let mut out = format!(
        "Customer pain points: {} complaints across {} categories",
        summary.total_complaints, summary.categories
    );
    for pain_point in &dataset.pain_points {
        let _ = write!(
            out,
            "\n  [{}] {}: {} reports ({})\n      {}",
            pain_point.severity.label(),
            pain_point.title,
            pain_point.count,
            pain_point.sources.join(", "),
            pain_point.details
        );
    }
    out.push_str("\n\n  Severity distribution:");
    for level in Level::ALL {
        let _ = write!(
            out,
            "\n    {}: {} ({}%)",
            level.label(),
            summary.severity_count(level),
            summary.severity_share_percent(level)
        );
    }
    out
}

fn render_trending(dataset: &Dataset) -> String {
    let summary = trending_summary(&dataset.trending);
    let mut out = format!(
        "Trending insights: {} tracked, average relevance {}%",
        summary.total, summary.average_relevance
    );
    for insight in &dataset.trending {
        let growth = insight
            .growth_percent()
            .map(|growth| format!("{growth:+}%"))
            .unwrap_or_else(|| "n/a".to_string());
        let current = insight
            .current_value()
            .map(|value| value.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        let _ = write!(
            out,
            "\n  {} ({}, {})\n      relevance {}%, growth {}, now {}\n      {}",
            insight.title,
            insight.category,
            insight.source,
            insight.relevance_score,
            growth,
            current,
            insight.summary
        );
    }
    out
}

fn recommendation_titles(items: &[&Recommendation]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items
            .iter()
            .map(|recommendation| recommendation.title)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn render_recommendations(dataset: &Dataset) -> String {
    let summary = recommendations_summary(&dataset.recommendations);
    let mut out = format!(
        "Recommendations: {} total, {} high confidence, {} high impact, {} quick wins",
        summary.total, summary.high_confidence, summary.high_impact, summary.quick_wins
    );
    for recommendation in &dataset.recommendations {
        let _ = write!(
            out,
            "\n  {} ({}% confidence, impact {}, effort {})\n      {}",
            recommendation.title,
            recommendation.confidence_level,
            recommendation.impact.label(),
            recommendation.effort.label(),
            recommendation.description
        );
        for evidence in recommendation.supporting_data {
            let _ = write!(out, "\n      • {evidence}");
        }
    }

    let matrix = priority_matrix(&dataset.recommendations);
    out.push_str("\n\n  Priority matrix:");
    let _ = write!(
        out,
        "\n    Quick wins (high impact, low effort): {}",
        recommendation_titles(&matrix.quick_wins)
    );
    let _ = write!(
        out,
        "\n    Major projects (high impact, high effort): {}",
        recommendation_titles(&matrix.major_projects)
    );
    let _ = write!(
        out,
        "\n    Fill-ins (lower impact, low effort): {}",
        recommendation_titles(&matrix.fill_ins)
    );
    let _ = write!(
        out,
        "\n    Thankless tasks (lower impact, high effort): {}",
        recommendation_titles(&matrix.thankless)
    );
    out
}

fn render_themes(dataset: &Dataset) -> String {
    let summary = themes_summary(dataset);
    let mut out = format!(
        "Themes to investigate: {} themes, {} data points (average {})",
        summary.total, summary.total_data_points, summary.average_data_points
    );
    for theme in &dataset.themes {
        let _ = write!(
            out,
            "\n  [{}] {}: {} data points ({})\n      {}",
            theme.priority.label(),
            theme.title,
            theme.data_points,
            theme.related_sources.join(", "),
            theme.description
        );
    }
    out
}
