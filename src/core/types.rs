use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Published,
    Draft,
    Archived,
}

/// A post record as loaded from storage. Content is HTML and may be malformed;
/// every analyzer here tolerates stray/unbalanced tags.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub seo_keywords: Vec<String>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

/// Expected word-count band for a content type.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct WordCountTarget {
    pub min: usize,
    pub ideal: usize,
    pub max: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    News,
    Blog,
    Diy,
    Recipe,
}

impl ContentType {
    /// Infer the content type from a post's tags. Priority order matters:
    /// a post tagged both "news" and "recipe" is news.
    pub fn from_tags(tags: &[String]) -> Self {
        let has = |needle: &str| tags.iter().any(|t| t.to_lowercase().contains(needle));
        if has("news") {
            ContentType::News
        } else if has("diy") {
            ContentType::Diy
        } else if has("recipe") {
            ContentType::Recipe
        } else {
            ContentType::Blog
        }
    }

    pub fn word_target(&self) -> WordCountTarget {
        match self {
            ContentType::News => WordCountTarget { min: 400, ideal: 500, max: 800 },
            ContentType::Blog => WordCountTarget { min: 1500, ideal: 2000, max: 3000 },
            ContentType::Diy => WordCountTarget { min: 1000, ideal: 1500, max: 2500 },
            ContentType::Recipe => WordCountTarget { min: 500, ideal: 800, max: 1500 },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::News => "news",
            ContentType::Blog => "blog",
            ContentType::Diy => "diy",
            ContentType::Recipe => "recipe",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageAudit {
    pub total: usize,
    pub with_alt: usize,
    pub missing_alt: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LinkAnalysis {
    pub total_links: usize,
    pub internal_links: usize,
    pub external_links: usize,
    /// Internal links per 100 words.
    pub density: f64,
    pub recommendation: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MetricStatus {
    Good,
    Warning,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Metric {
    pub value: f64,
    pub target: String,
    pub status: MetricStatus,
}

/// Per-metric pass/warn summary. Thresholds here are restated independently of
/// the issue logic in the scorer and must stay in sync with it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Metrics {
    pub word_count: Metric,
    pub readability: Metric,
    pub headings: Metric,
    pub images: Metric,
    pub internal_links: Metric,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QualityReport {
    pub score: u32,
    pub grade: Grade,
    pub color: ScoreColor,
    pub word_count: usize,
    pub target: WordCountTarget,
    pub readability_score: f64,
    pub headings: HeadingCounts,
    pub images: ImageAudit,
    pub links: LinkAnalysis,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub metrics: Metrics,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct KeywordStat {
    pub keyword: String,
    pub count: usize,
    pub density: f64,
    pub overused: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct KeywordDensityReport {
    pub keywords: Vec<KeywordStat>,
    pub average_density: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Tags,
    Category,
    Keywords,
}

/// Ephemeral projection of a related post, used only to drive link injection
/// and "related articles" display within one call.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RelatedPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<Category>,
    pub excerpt: String,
    #[serde(default)]
    pub reading_time: Option<u32>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub relevance_score: u32,
    pub match_type: MatchType,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InjectionResult {
    pub content: String,
    pub links_added: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreDistribution {
    pub excellent: usize,
    pub very_good: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IssueFrequency {
    pub issue: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScoredPost {
    pub post_id: String,
    pub title: String,
    pub report: QualityReport,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BatchReport {
    pub total: usize,
    pub avg_score: u32,
    pub distribution: ScoreDistribution,
    pub top_issues: Vec<IssueFrequency>,
    pub results: Vec<ScoredPost>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BatchLinkError {
    pub post_id: String,
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BatchLinkReport {
    pub processed: usize,
    pub links_added: usize,
    pub errors: Vec<BatchLinkError>,
}

// ---------------------------------------------------------------------------
// HTTP request payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub post: Post,
    #[serde(default)]
    pub content_type: Option<ContentType>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchQualityRequest {
    pub posts: Vec<Post>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RelatedRequest {
    pub post: Post,
    pub pool: Vec<Post>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InjectRequest {
    pub content: String,
    pub related_posts: Vec<RelatedPost>,
    #[serde(default)]
    pub max_links: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeLinksRequest {
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchLinksRequest {
    pub post_ids: Vec<String>,
}
