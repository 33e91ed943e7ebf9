//! Read-only projections over the dataset: counts, sums and rounded percentages.

use std::collections::BTreeMap;

use super::dataset::{Dataset, Level, Metric, MetricStatus, Recommendation, TrendingInsight};

/// Rounds half-way values toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// `part / whole` as a whole-number percentage; 0 when `whole` is 0.
pub fn percent(part: usize, whole: usize) -> i64 {
    if whole == 0 {
        0
    } else {
        round_half_up(part as f64 / whole as f64 * 100.0)
    }
}

fn average(total: f64, count: usize) -> i64 {
    if count == 0 {
        0
    } else {
        round_half_up(total / count as f64)
    }
}

fn count_levels<T>(items: &[T], level_of: impl Fn(&T) -> Level) -> BTreeMap<Level, usize> {
    let mut counts: BTreeMap<Level, usize> = Level::ALL.iter().map(|level| (*level, 0)).collect();
    for item in items {
        *counts.entry(level_of(item)).or_default() += 1;
    }
    counts
}

impl Metric {
    /// Value as a percentage of target.
    pub fn attainment_percent(&self) -> i64 {
        if self.target == 0.0 {
            0
        } else {
            round_half_up(self.value / self.target * 100.0)
        }
    }
}

impl TrendingInsight {
    /// Growth from the first to the last chart point, in percent.
    pub fn growth_percent(&self) -> Option<i64> {
        let first = self.chart_data.first()?;
        let last = self.chart_data.last()?;
        if first.value == 0.0 {
            return None;
        }
        Some(round_half_up((last.value - first.value) / first.value * 100.0))
    }

    pub fn current_value(&self) -> Option<f64> {
        self.chart_data.last().map(|point| point.value)
    }
}

impl Recommendation {
    pub fn is_high_confidence(&self) -> bool {
        self.confidence_level >= HIGH_CONFIDENCE_THRESHOLD
    }

    pub fn is_quick_win(&self) -> bool {
        self.effort == Level::Low && self.impact != Level::Low
    }
}

pub const HIGH_CONFIDENCE_THRESHOLD: u32 = 80;
pub const HIGH_RELEVANCE_THRESHOLD: u32 = 90;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub total: usize,
    pub by_status: BTreeMap<&'static str, usize>,
    pub good: usize,
    pub warning: usize,
    pub critical: usize,
}

impl MetricsSummary {
    pub fn share_percent(&self, status: MetricStatus) -> i64 {
        let count = match status {
            MetricStatus::Good => self.good,
            MetricStatus::Warning => self.warning,
            MetricStatus::Critical => self.critical,
        };
        percent(count, self.total)
    }
}

pub fn metrics_summary(metrics: &[Metric]) -> MetricsSummary {
    let count = |status| metrics.iter().filter(|m| m.status == status).count();
    let good = count(MetricStatus::Good);
    let warning = count(MetricStatus::Warning);
    let critical = count(MetricStatus::Critical);
    MetricsSummary {
        total: metrics.len(),
        by_status: MetricStatus::ALL
            .iter()
            .map(|status| (status.label(), count(*status)))
            .collect(),
        good,
        warning,
        critical,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PainPointsSummary {
    pub categories: usize,
    pub total_complaints: u64,
    pub by_severity: BTreeMap<Level, usize>,
}

impl PainPointsSummary {
    pub fn severity_count(&self, level: Level) -> usize {
        self.by_severity.get(&level).copied().unwrap_or(0)
    }

    pub fn severity_share_percent(&self, level: Level) -> i64 {
        percent(self.severity_count(level), self.categories)
    }
}

pub fn pain_points_summary(dataset: &Dataset) -> PainPointsSummary {
    let pain_points = &dataset.pain_points;
    PainPointsSummary {
        categories: pain_points.len(),
        total_complaints: pain_points.iter().map(|p| u64::from(p.count)).sum(),
        by_severity: count_levels(pain_points, |p| p.severity),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingSummary {
    pub total: usize,
    pub average_relevance: i64,
    pub high_relevance: usize,
}

pub fn trending_summary(insights: &[TrendingInsight]) -> TrendingSummary {
    let total_relevance: f64 = insights.iter().map(|t| f64::from(t.relevance_score)).sum();
    TrendingSummary {
        total: insights.len(),
        average_relevance: average(total_relevance, insights.len()),
        high_relevance: insights
            .iter()
            .filter(|t| t.relevance_score >= HIGH_RELEVANCE_THRESHOLD)
            .count(),
    }
}

/// Impact/effort quadrants. Recommendations of medium effort fall in none.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityMatrix<'a> {
    /// High impact, low effort.
    pub quick_wins: Vec<&'a Recommendation>,
    /// High impact, high effort.
    pub major_projects: Vec<&'a Recommendation>,
    /// Lower impact, low effort.
    pub fill_ins: Vec<&'a Recommendation>,
    /// Lower impact, high effort.
    pub thankless: Vec<&'a Recommendation>,
}

pub fn priority_matrix(recommendations: &[Recommendation]) -> PriorityMatrix<'_> {
    let pick = |high_impact: bool, effort: Level| {
        recommendations
            .iter()
            .filter(|r| (r.impact == Level::High) == high_impact && r.effort == effort)
            .collect()
    };
    PriorityMatrix {
        quick_wins: pick(true, Level::Low),
        major_projects: pick(true, Level::High),
        fill_ins: pick(false, Level::Low),
        thankless: pick(false, Level::High),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationsSummary {
    pub total: usize,
    pub high_confidence: usize,
    pub high_impact: usize,
    pub quick_wins: usize,
}

pub fn recommendations_summary(recommendations: &[Recommendation]) -> RecommendationsSummary {
    RecommendationsSummary {
        total: recommendations.len(),
        high_confidence: recommendations
            .iter()
            .filter(|r| r.is_high_confidence())
            .count(),
        high_impact: recommendations
            .iter()
            .filter(|r| r.impact == Level::High)
            .count(),
        quick_wins: recommendations.iter().filter(|r| r.is_quick_win()).count(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemesSummary {
    pub total: usize,
    pub by_priority: BTreeMap<Level, usize>,
    pub total_data_points: u64,
    pub average_data_points: i64,
}

pub fn themes_summary(dataset: &Dataset) -> ThemesSummary {
    let themes = &dataset.themes;
    let total_data_points: u64 = themes.iter().map(|t| u64::from(t.data_points)).sum();
    ThemesSummary {
        total: themes.len(),
        by_priority: count_levels(themes, |t| t.priority),
        total_data_points,
        average_data_points: average(total_data_points as f64, themes.len()),
    }
}

/// Headline numbers for the dashboard overview.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub metrics: MetricsSummary,
    pub pain_points: PainPointsSummary,
    pub trending: TrendingSummary,
    pub recommendations: RecommendationsSummary,
    pub themes: ThemesSummary,
}

pub fn overview(dataset: &Dataset) -> Overview {
    Overview {
        metrics: metrics_summary(&dataset.metrics),
        pain_points: pain_points_summary(dataset),
        trending: trending_summary(&dataset.trending),
        recommendations: recommendations_summary(&dataset.recommendations),
        themes: themes_summary(dataset),
    }
}
