//! Built-in analytics dataset shown on the dashboard screens.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricStatus {
    Good,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Shared three-step scale for severity, priority, impact and effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::High, Level::Medium, Level::Low];

    pub fn label(self) -> &'static str {
        match self {
            Level::High => "High",
            Level::Medium => "Medium",
            Level::Low => "Low",
        }
    }
}

impl MetricStatus {
    pub const ALL: [MetricStatus; 3] =
        [MetricStatus::Good, MetricStatus::Warning, MetricStatus::Critical];

    pub fn label(self) -> &'static str {
        match self {
            MetricStatus::Good => "On Track",
            MetricStatus::Warning => "Needs Attention",
            MetricStatus::Critical => "Critical",
        }
    }
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: &'static str,
    pub value: f64,
    pub target: f64,
    pub status: MetricStatus,
    pub trend: Trend,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PainPoint {
    pub id: &'static str,
    pub title: &'static str,
    pub count: u32,
    pub severity: Level,
    pub sources: &'static [&'static str],
    pub details: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub date: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingInsight {
    pub id: &'static str,
    pub title: &'static str,
    pub source: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub relevance_score: u32,
    pub chart_data: &'static [ChartPoint],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub confidence_level: u32,
    pub impact: Level,
    pub effort: Level,
    pub supporting_data: &'static [&'static str],
    pub metrics: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub data_points: u32,
    pub related_sources: &'static [&'static str],
    pub priority: Level,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub metrics: Vec<Metric>,
    pub pain_points: Vec<PainPoint>,
    pub trending: Vec<TrendingInsight>,
    pub recommendations: Vec<Recommendation>,
    pub themes: Vec<Theme>,
}

impl Dataset {
    pub fn builtin() -> Self {
        Self {
            metrics: metrics(),
            pain_points: pain_points(),
            trending: trending_insights(),
            recommendations: recommendations(),
            themes: themes(),
        }
    }
}

fn metrics() -> Vec<Metric> {
    vec![
        Metric {
            name: "User Engagement Rate",
            value: 78.0,
            target: 85.0,
            status: MetricStatus::Warning,
            trend: Trend::Down,
            change_percent: -3.2,
        },
        Metric {
            name: "Conversion Rate",
            value: 4.2,
            target: 4.5,
            status: MetricStatus::Warning,
            trend: Trend::Stable,
            change_percent: 0.1,
        },
        Metric {
            name: "Customer Satisfaction",
            value: 92.0,
            target: 90.0,
            status: MetricStatus::Good,
            trend: Trend::Up,
            change_percent: 5.8,
        },
        Metric {
            name: "Task Completion Rate",
            value: 65.0,
            target: 80.0,
            status: MetricStatus::Critical,
            trend: Trend::Down,
            change_percent: -8.1,
        },
        Metric {
            name: "Time on Task (avg)",
            value: 142.0,
            target: 120.0,
            status: MetricStatus::Warning,
            trend: Trend::Up,
            change_percent: 7.5,
        },
    ]
}

fn pain_points() -> Vec<PainPoint> {
    vec![
        PainPoint {
            id: "pain1",
            title: "Checkout Process Too Complex",
            count: 347,
            severity: Level::High,
            sources: &["Customer reviews", "CSAT", "Adobe Analytics"],
            details: "Users report difficulty completing purchases due to multi-step checkout process. 42% abandon at payment information step.",
        },
        PainPoint {
            id: "pain2",
            title: "Search Results Not Relevant",
            count: 289,
            severity: Level::High,
            sources: &["Adobe Analytics", "We do", "Customer reviews"],
            details: "Search queries return poor results. Users reformulate search 3.4 times on average before finding desired item.",
        },
        PainPoint {
            id: "pain3",
            title: "Mobile Navigation Confusing",
            count: 156,
            severity: Level::Medium,
            sources: &["Research packs", "CSAT"],
            details: "Mobile users struggle to find key features. Navigation menu depth causes confusion and increased bounce rates.",
        },
        PainPoint {
            id: "pain4",
            title: "Load Times on Product Pages",
            count: 134,
            severity: Level::Medium,
            sources: &["Adobe Analytics", "Customer reviews"],
            details: "Product pages load slowly, particularly on mobile devices. Average load time 4.2s vs industry standard 2.5s.",
        },
        PainPoint {
            id: "pain5",
            title: "Account Creation Friction",
            count: 98,
            severity: Level::Low,
            sources: &["CSAT", "Research packs"],
            details: "New users report frustration with required account creation. 28% prefer guest checkout option.",
        },
    ]
}

fn trending_insights() -> Vec<TrendingInsight> {
    vec![
        TrendingInsight {
            id: "trend1",
            title: "Voice Search Adoption Rising",
            source: "Industry Reports",
            category: "Technology",
            summary: "Voice-activated search increasing 45% YoY. Competitors implementing voice UI with positive results.",
            relevance_score: 87,
            chart_data: &[
                ChartPoint { date: "Jan", value: 12.0 },
                ChartPoint { date: "Feb", value: 15.0 },
                ChartPoint { date: "Mar", value: 19.0 },
                ChartPoint { date: "Apr", value: 24.0 },
                ChartPoint { date: "May", value: 28.0 },
                ChartPoint { date: "Jun", value: 35.0 },
            ],
        },
        TrendingInsight {
            id: "trend2",
            title: "Personalization Drives Engagement",
            source: "Competitor Analysis",
            category: "UX Strategy",
            summary: "Personalized experiences show 3x higher engagement. Top performers using ML-driven content recommendations.",
            relevance_score: 92,
            chart_data: &[
                ChartPoint { date: "Jan", value: 45.0 },
                ChartPoint { date: "Feb", value: 52.0 },
                ChartPoint { date: "Mar", value: 58.0 },
                ChartPoint { date: "Apr", value: 67.0 },
                ChartPoint { date: "May", value: 73.0 },
                ChartPoint { date: "Jun", value: 81.0 },
            ],
        },
        TrendingInsight {
            id: "trend3",
            title: "One-Click Checkout Becoming Standard",
            source: "Market Research",
            category: "E-commerce",
            summary: "68% of leading e-commerce sites now offer one-click purchasing. Conversion rates up 35% with this feature.",
            relevance_score: 94,
            chart_data: &[
                ChartPoint { date: "Jan", value: 32.0 },
                ChartPoint { date: "Feb", value: 38.0 },
                ChartPoint { date: "Mar", value: 45.0 },
                ChartPoint { date: "Apr", value: 52.0 },
                ChartPoint { date: "May", value: 61.0 },
                ChartPoint { date: "Jun", value: 68.0 },
            ],
        },
    ]
}

fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            id: "rec1",
            title: "Simplify Checkout Flow to 2 Steps",
            description: "Consolidate current 5-step checkout into express 2-step process. Implement one-click purchase for returning customers.",
            confidence_level: 85,
            impact: Level::High,
            effort: Level::Medium,
            supporting_data: &[
                "347 complaints about checkout complexity",
                "A/B test showed 28% conversion lift with simplified flow",
                "Industry benchmark: 2-3 steps optimal",
            ],
            metrics: &["Conversion Rate", "Cart Abandonment"],
        },
        Recommendation {
            id: "rec2",
            title: "Implement AI-Powered Search",
            description: "Replace current keyword search with ML-based semantic search that understands user intent and product relationships.",
            confidence_level: 78,
            impact: Level::High,
            effort: Level::High,
            supporting_data: &[
                "289 complaints about search relevance",
                "Users reformulate searches 3.4x average",
                "Competitors seeing 45% improvement in search success rate",
            ],
            metrics: &["Search Success Rate", "User Engagement"],
        },
        Recommendation {
            id: "rec3",
            title: "Optimize Mobile Navigation",
            description: "Redesign mobile navigation with simplified menu structure and bottom navigation bar for key features.",
            confidence_level: 72,
            impact: Level::Medium,
            effort: Level::Low,
            supporting_data: &[
                "156 mobile navigation complaints",
                "Mobile bounce rate 23% higher than desktop",
                "Usability testing identified 4 key improvements",
            ],
            metrics: &["Mobile Engagement", "Task Completion Rate"],
        },
        Recommendation {
            id: "rec4",
            title: "Implement Progressive Image Loading",
            description: "Add lazy loading and WebP format for product images to reduce page load times by estimated 40%.",
            confidence_level: 68,
            impact: Level::Medium,
            effort: Level::Low,
            supporting_data: &[
                "Current load time 4.2s vs 2.5s industry standard",
                "134 complaints about slow loading",
                "Google reports 53% mobile users abandon after 3s",
            ],
            metrics: &["Page Load Time", "Bounce Rate"],
        },
        Recommendation {
            id: "rec5",
            title: "Add Guest Checkout Option",
            description: "Allow users to complete purchase without account creation. Offer account creation post-purchase with incentive.",
            confidence_level: 65,
            impact: Level::Medium,
            effort: Level::Low,
            supporting_data: &[
                "98 complaints about forced account creation",
                "28% of users prefer guest checkout",
                "Industry data shows 23% checkout completion lift",
            ],
            metrics: &["Conversion Rate", "New Customer Acquisition"],
        },
    ]
}

fn themes() -> Vec<Theme> {
    vec![
        Theme {
            id: "theme1",
            title: "Payment Method Diversity",
            description: "Multiple mentions of alternative payment methods (Apple Pay, PayPal, Buy Now Pay Later) but data inconclusive.",
            data_points: 67,
            related_sources: &["Customer reviews", "CSAT"],
            priority: Level::High,
        },
        Theme {
            id: "theme2",
            title: "Product Comparison Features",
            description: "Users expressing desire to compare multiple products side-by-side. Current behavior patterns unclear.",
            data_points: 54,
            related_sources: &["Adobe Analytics", "Research packs"],
            priority: Level::Medium,
        },
        Theme {
            id: "theme3",
            title: "Social Proof & Reviews",
            description: "Mixed signals about importance of reviews and ratings in purchase decisions. Needs deeper investigation.",
            data_points: 89,
            related_sources: &["We do", "Customer reviews", "Research packs"],
            priority: Level::Medium,
        },
        Theme {
            id: "theme4",
            title: "Personalization Preferences",
            description: "Some users value personalized recommendations while others find them intrusive. Segment analysis needed.",
            data_points: 43,
            related_sources: &["CSAT", "Adobe Analytics"],
            priority: Level::Low,
        },
        Theme {
            id: "theme5",
            title: "Accessibility Concerns",
            description: "Limited mentions of accessibility issues, but potential gap in current data collection methods.",
            data_points: 23,
            related_sources: &["Customer reviews"],
            priority: Level::High,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_is_complete() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.metrics.len(), 5);
        assert_eq!(dataset.pain_points.len(), 5);
        assert_eq!(dataset.recommendations.len(), 5);
        assert_eq!(dataset.themes.len(), 5);
        assert_eq!(dataset.trending.len(), 3);
    }

    #[test]
    fn trending_series_cover_january_to_june() {
        let dataset = Dataset::builtin();
        for insight in &dataset.trending {
            let months: Vec<_> = insight.chart_data.iter().map(|p| p.date).collect();
            assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"], "{}", insight.id);
        }
        let checkout = &dataset.trending[2];
        assert_eq!(
            checkout.chart_data.first(),
            Some(&ChartPoint { date: "Jan", value: 32.0 })
        );
        assert_eq!(checkout.chart_data[5].value, 68.0);
    }
}
