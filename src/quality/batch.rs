//! Batch quality analysis and aggregation.

use std::collections::HashMap;

use tracing::info;

use crate::quality::analyze_content_quality;
use crate::types::{
    BatchReport, ContentType, IssueFrequency, Post, QualityReport, ScoreDistribution, ScoredPost,
};

/// Score every post (content type inferred from tags) and aggregate the
/// results. O(n) over posts.
pub fn batch_analyze_quality(posts: &[Post]) -> BatchReport {
    let results: Vec<ScoredPost> = posts
        .iter()
        .map(|post| {
            let content_type = ContentType::from_tags(&post.tags);
            ScoredPost {
                post_id: post.id.clone(),
                title: post.title.clone(),
                report: analyze_content_quality(post, content_type),
            }
        })
        .collect();

    let report = BatchReport::from_scored(results);
    info!(
        "Batch quality analysis: {} posts, average score {}",
        report.total, report.avg_score
    );
    report
}

impl BatchReport {
    /// Aggregate already-scored posts: rounded average, five-band score
    /// distribution, and the five most frequent issues grouped by their
    /// leading sentence.
    pub fn from_scored(results: Vec<ScoredPost>) -> Self {
        let total = results.len();

        let avg_score = if total == 0 {
            0
        } else {
            let sum: f64 = results.iter().map(|r| r.report.score as f64).sum();
            (sum / total as f64).round() as u32
        };

        let mut distribution = ScoreDistribution::default();
        for r in &results {
            match r.report.score {
                s if s >= 90 => distribution.excellent += 1,
                s if s >= 80 => distribution.very_good += 1,
                s if s >= 70 => distribution.good += 1,
                s if s >= 60 => distribution.fair += 1,
                _ => distribution.poor += 1,
            }
        }

        let top_issues = top_issues(results.iter().map(|r| &r.report));

        BatchReport { total, avg_score, distribution, top_issues, results }
    }
}

/// Issues grouped by their leading sentence (text before the first period),
/// ranked by frequency descending, capped at five. Ties break alphabetically
/// so the ordering is deterministic.
fn top_issues<'a>(reports: impl Iterator<Item = &'a QualityReport>) -> Vec<IssueFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for report in reports {
        for issue in &report.issues {
            let key = issue.split('.').next().unwrap_or(issue).trim().to_string();
            if !key.is_empty() {
                *counts.entry(key).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<IssueFrequency> = counts
        .into_iter()
        .map(|(issue, count)| IssueFrequency { issue, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.issue.cmp(&b.issue)));
    ranked.truncate(5);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Grade, HeadingCounts, ImageAudit, LinkAnalysis, Metric, MetricStatus, Metrics,
        ScoreColor, WordCountTarget,
    };

    fn report_with(score: u32, issues: Vec<String>) -> QualityReport {
        let metric = Metric {
            value: 0.0,
            target: String::new(),
            status: MetricStatus::Warning,
        };
        QualityReport {
            score,
            grade: Grade::Good,
            color: ScoreColor::Yellow,
            word_count: 0,
            target: WordCountTarget { min: 0, ideal: 0, max: 0 },
            readability_score: 0.0,
            headings: HeadingCounts::default(),
            images: ImageAudit::default(),
            links: LinkAnalysis::default(),
            issues,
            recommendations: Vec::new(),
            metrics: Metrics {
                word_count: metric.clone(),
                readability: metric.clone(),
                headings: metric.clone(),
                images: metric.clone(),
                internal_links: metric,
            },
        }
    }

    fn scored(id: &str, score: u32, issues: Vec<String>) -> ScoredPost {
        ScoredPost {
            post_id: id.to_string(),
            title: format!("Post {}", id),
            report: report_with(score, issues),
        }
    }

    #[test]
    fn aggregates_average_and_distribution() {
        let results = vec![
            scored("a", 95, vec![]),
            scored("b", 85, vec![]),
            scored("c", 72, vec![]),
            scored("d", 55, vec![]),
            scored("e", 40, vec![]),
        ];
        let batch = BatchReport::from_scored(results);
        assert_eq!(batch.avg_score, 69);
        assert_eq!(batch.distribution.excellent, 1);
        assert_eq!(batch.distribution.very_good, 1);
        assert_eq!(batch.distribution.good, 1);
        assert_eq!(batch.distribution.fair, 0);
        assert_eq!(batch.distribution.poor, 2);
    }

    #[test]
    fn groups_issues_by_leading_sentence() {
        let results = vec![
            scored("a", 50, vec!["No images found. Visual content matters".to_string()]),
            scored("b", 50, vec!["No images found. Add some".to_string()]),
            scored("c", 50, vec!["No headings found. Hard to scan".to_string()]),
        ];
        let batch = BatchReport::from_scored(results);
        assert_eq!(batch.top_issues[0].issue, "No images found");
        assert_eq!(batch.top_issues[0].count, 2);
        assert_eq!(batch.top_issues[1].count, 1);
    }

    #[test]
    fn empty_batch_is_well_formed() {
        let batch = BatchReport::from_scored(Vec::new());
        assert_eq!(batch.total, 0);
        assert_eq!(batch.avg_score, 0);
        assert!(batch.top_issues.is_empty());
    }
}
