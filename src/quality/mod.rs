//! Content quality scorer.
//!
//! Pure and deterministic: same post in, same report out. Missing fields are
//! treated as empty, never as errors, so the worst input yields a very low
//! score rather than a failure.

pub mod batch;
pub mod keywords;
pub mod readability;

use crate::core::config;
use crate::linking::analyze::analyze_internal_links;
use crate::text;
use crate::types::{
    ContentType, Grade, Metric, MetricStatus, Metrics, Post, QualityReport, ScoreColor,
};

pub use batch::batch_analyze_quality;
pub use keywords::analyze_keyword_density;

/// Score a post's content quality from 0 to 100 with itemized issues and
/// recommendations. Starts at 100 and deducts per rule.
pub fn analyze_content_quality(post: &Post, content_type: ContentType) -> QualityReport {
    let mut score: i32 = 100;
    let mut issues: Vec<String> = Vec::new();
    let mut recommendations: Vec<String> = Vec::new();

    let plain_text = text::strip_html(&post.content);
    let word_count = text::count_words(&plain_text);
    let target = content_type.word_target();

    // 1. Word count vs the content-type band
    if word_count < target.min {
        score -= 20;
        issues.push(format!(
            "Content is too short: {} words. {} content needs at least {} words",
            word_count,
            content_type.label(),
            target.min
        ));
        recommendations.push(format!(
            "Add {} more words to reach the minimum length",
            target.min - word_count
        ));
    } else if word_count > target.max {
        score -= 5;
        issues.push(format!(
            "Content is very long: {} words (maximum {}). Consider splitting it into a series",
            word_count, target.max
        ));
    } else if word_count < target.ideal {
        score -= 5;
        recommendations.push(format!(
            "Add around {} more words to reach the ideal length of {}",
            target.ideal - word_count,
            target.ideal
        ));
    }

    // 2. Readability
    let readability_score = readability::flesch_reading_ease(&plain_text);
    if readability_score < 50.0 {
        score -= 15;
        issues.push(format!(
            "Readability is low: Flesch score {:.0}. Use shorter sentences and simpler words",
            readability_score
        ));
    } else if readability_score < 60.0 {
        score -= 5;
        recommendations.push(format!(
            "Readability could be better: Flesch score {:.0}. Aim for 60 or higher",
            readability_score
        ));
    }

    // 3. Heading structure
    let headings = text::count_headings(&post.content);
    if headings.total == 0 {
        score -= 20;
        issues.push("No headings found. Unstructured content is hard to scan".to_string());
        recommendations.push("Add 5-8 headings (H2/H3) to break up the content".to_string());
    } else if headings.total < 5 && word_count > 1000 {
        score -= 10;
        issues.push(format!(
            "Only {} headings for {} words of content",
            headings.total, word_count
        ));
        recommendations.push(format!("Add {} more headings", 5 - headings.total));
    }
    if headings.h1 > 1 {
        score -= 10;
        issues.push(format!(
            "Multiple H1 tags found: {}. Only one H1 (the title) is allowed",
            headings.h1
        ));
    }

    // 4. Image coverage
    let images = text::audit_images(&post.content);
    let recommended_images = word_count.div_ceil(500).max(1);
    if images.total == 0 {
        if word_count > 500 {
            score -= 15;
        }
        issues.push("No images found. Visual content keeps readers engaged".to_string());
        recommendations.push(format!(
            "Add at least {} images with descriptive alt text",
            recommended_images
        ));
    } else if images.total < recommended_images {
        score -= 5;
        recommendations.push(format!(
            "Add {} more images to match the content length",
            recommended_images - images.total
        ));
    }
    if images.missing_alt > 0 {
        score -= 10;
        issues.push(format!("{} images are missing alt text", images.missing_alt));
        recommendations.push("Add descriptive alt text to every image".to_string());
    }

    // 5. Internal links
    let links = analyze_internal_links(&post.content);
    if links.internal_links == 0 {
        score -= 15;
        issues.push("No internal links found. Internal links help readers and SEO".to_string());
        recommendations.push("Add 3-5 internal links to related articles".to_string());
    } else if links.internal_links < 3 {
        score -= 5;
        recommendations.push(format!(
            "Add {} more internal links",
            3 - links.internal_links
        ));
    } else if links.internal_links > 10 {
        score -= 5;
        issues.push(format!(
            "Too many internal links: {}. This can look spammy",
            links.internal_links
        ));
    }

    // 6. External links (advisory only)
    if links.external_links == 0 && word_count > 1000 {
        score -= 3;
        recommendations
            .push("Add 1-2 external links to authoritative sources".to_string());
    }

    // 7. Keyword density
    if !post.seo_keywords.is_empty() {
        let density = keywords::analyze_keyword_density(&plain_text, &post.seo_keywords);
        let overused: Vec<&str> = density
            .keywords
            .iter()
            .filter(|k| k.overused)
            .map(|k| k.keyword.as_str())
            .collect();
        if !overused.is_empty() {
            score -= 10;
            issues.push(format!(
                "Keywords overused: {}. Density above 2% reads as keyword stuffing",
                overused.join(", ")
            ));
            recommendations.push("Reduce keyword density to 1-2%".to_string());
        }
        if density.average_density < config::KEYWORD_UNDERUSE_AVG_PCT {
            score -= 3;
            recommendations.push(format!(
                "Use target keywords more often: average density is {:.2}%",
                density.average_density
            ));
        }
    }

    // 8. Meta description
    match post.seo_description.as_deref().map(str::len) {
        None => {
            score -= 10;
            issues.push("Meta description is missing".to_string());
            recommendations.push("Write a meta description of 125-155 characters".to_string());
        }
        Some(len) if len < 125 => {
            score -= 10;
            issues.push(format!("Meta description is too short: {} characters", len));
            recommendations.push("Write a meta description of 125-155 characters".to_string());
        }
        Some(len) if len > 155 => {
            score -= 5;
            issues.push(format!(
                "Meta description is {} characters and will be truncated in search results",
                len
            ));
        }
        Some(_) => {}
    }

    // 9. SEO title
    match post.seo_title.as_deref().map(str::len) {
        None => {
            score -= 5;
            recommendations.push("Write an SEO title of 30-60 characters".to_string());
        }
        Some(len) if len < 30 => {
            score -= 5;
            recommendations.push("Write an SEO title of 30-60 characters".to_string());
        }
        Some(len) if len > 60 => {
            score -= 5;
            issues.push(format!(
                "SEO title is {} characters and will be truncated in search results",
                len
            ));
        }
        Some(_) => {}
    }

    let score = score.clamp(0, 100) as u32;
    let (grade, color) = grade_for(score);

    let metrics = build_metrics(
        word_count,
        target,
        readability_score,
        &headings,
        &images,
        recommended_images,
        links.internal_links,
    );

    QualityReport {
        score,
        grade,
        color,
        word_count,
        target,
        readability_score: (readability_score * 10.0).round() / 10.0,
        headings,
        images,
        links,
        issues,
        recommendations,
        metrics,
    }
}

fn grade_for(score: u32) -> (Grade, ScoreColor) {
    if score >= 90 {
        (Grade::Excellent, ScoreColor::Green)
    } else if score >= 80 {
        (Grade::VeryGood, ScoreColor::Green)
    } else if score >= 70 {
        (Grade::Good, ScoreColor::Yellow)
    } else if score >= 60 {
        (Grade::Fair, ScoreColor::Yellow)
    } else {
        (Grade::NeedsImprovement, ScoreColor::Red)
    }
}

/// Short human-readable verdict for a score.
pub fn get_quality_message(score: u32) -> &'static str {
    if score >= 90 {
        "Excellent! This article is comprehensive and well optimized."
    } else if score >= 80 {
        "Very good. A few small improvements would make it excellent."
    } else if score >= 70 {
        "Good, but there is clear room for improvement."
    } else if score >= 60 {
        "Fair. Several quality issues need attention."
    } else {
        "Needs improvement. Address the listed issues before publishing."
    }
}

#[allow(clippy::too_many_arguments)]
fn build_metrics(
    word_count: usize,
    target: crate::types::WordCountTarget,
    readability_score: f64,
    headings: &crate::types::HeadingCounts,
    images: &crate::types::ImageAudit,
    recommended_images: usize,
    internal_links: usize,
) -> Metrics {
    let status = |good: bool| if good { MetricStatus::Good } else { MetricStatus::Warning };

    Metrics {
        word_count: Metric {
            value: word_count as f64,
            target: format!("{}-{} words", target.min, target.max),
            status: status(word_count >= target.min && word_count <= target.max),
        },
        readability: Metric {
            value: (readability_score * 10.0).round() / 10.0,
            target: "60 or higher".to_string(),
            status: status(readability_score >= 60.0),
        },
        headings: Metric {
            value: headings.total as f64,
            target: "5 or more".to_string(),
            status: status(headings.total >= 5),
        },
        images: Metric {
            value: images.total as f64,
            target: format!("{} or more, all with alt text", recommended_images),
            status: status(images.total >= recommended_images && images.missing_alt == 0),
        },
        internal_links: Metric {
            value: internal_links as f64,
            target: "3-10".to_string(),
            status: status(internal_links >= 3),
        },
    }
}
