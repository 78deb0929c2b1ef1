use editorial_lens::{
    analyze_content_quality, batch_analyze_quality, types::*,
};

fn simple_sentences(count: usize) -> String {
    "We cook rice. ".repeat(count)
}

/// A blog post engineered to clear every scoring rule.
fn excellent_blog_post() -> Post {
    let mut body = String::new();
    body.push_str("<h1>The Complete Guide To Weeknight Curries</h1>");
    for i in 1..=5 {
        body.push_str(&format!("<h2>Part {}</h2>", i));
    }
    body.push_str(&format!("<p>{}</p>", simple_sentences(700)));
    for i in 0..4 {
        body.push_str(&format!(r#" <a href="/blog/curry-{}">curry guide</a>"#, i));
    }
    body.push_str(r#" <a href="https://example.org/spices">spice research</a>"#);
    for i in 0..5 {
        body.push_str(&format!(r#"<img src="/img/step-{}.jpg" alt="cooking step {}">"#, i, i));
    }

    Post {
        id: "excellent".to_string(),
        title: "The Complete Guide To Weeknight Curries".to_string(),
        slug: "weeknight-curries".to_string(),
        content: body,
        seo_title: Some("The Complete Guide To Weeknight Curries At Home Fast".to_string()),
        seo_description: Some(
            "Learn how to build deeply flavored weeknight curries from scratch, with timing, \
             spice blooming, and make-ahead tips for busy home cooks."
                .to_string(),
        ),
        ..Default::default()
    }
}

#[test]
fn well_formed_blog_post_scores_excellent() {
    let post = excellent_blog_post();
    assert_eq!(post.seo_title.as_ref().unwrap().len(), 52);
    let desc_len = post.seo_description.as_ref().unwrap().len();
    assert!((125..=155).contains(&desc_len), "description is {} chars", desc_len);

    let report = analyze_content_quality(&post, ContentType::Blog);
    assert!(report.word_count >= 2000 && report.word_count <= 3000);
    assert!(report.readability_score >= 60.0);
    assert!(report.score >= 90, "score was {} with issues {:?}", report.score, report.issues);
    assert_eq!(report.grade, Grade::Excellent);
    assert_eq!(report.color, ScoreColor::Green);
}

#[test]
fn empty_post_reports_structural_issues() {
    let post = Post {
        id: "empty".to_string(),
        title: "Empty".to_string(),
        ..Default::default()
    };
    let report = analyze_content_quality(&post, ContentType::Blog);

    assert_eq!(report.word_count, 0);
    assert!(report.score < 30, "score was {}", report.score);
    assert!(!report.issues.is_empty());
    assert!(report.issues.iter().any(|i| i.contains("No headings")));
    assert!(report.issues.iter().any(|i| i.contains("No images")));
    assert!(report.issues.iter().any(|i| i.contains("No internal links")));
}

#[test]
fn analysis_is_idempotent() {
    let post = excellent_blog_post();
    let first = analyze_content_quality(&post, ContentType::Blog);
    let second = analyze_content_quality(&post, ContentType::Blog);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn score_and_readability_stay_in_bounds() {
    let inputs = [
        String::new(),
        "<h1>A</h1><h1>B</h1><h1>C</h1>".to_string(),
        "<p>word</p>".repeat(5000),
        simple_sentences(2000),
        "<<<>>> &&& <img <a href".to_string(),
    ];
    for content in inputs {
        let post = Post { id: "x".into(), title: "X".into(), content, ..Default::default() };
        for ct in [ContentType::News, ContentType::Blog, ContentType::Diy, ContentType::Recipe] {
            let report = analyze_content_quality(&post, ct);
            assert!(report.score <= 100);
            assert!((0.0..=100.0).contains(&report.readability_score));
        }
    }
}

/// Increasing word count from below the minimum toward the ideal never
/// lowers the score, all other signals held fixed.
#[test]
fn word_count_scoring_is_monotonic_toward_ideal() {
    let score_at = |words: usize| {
        let mut body = String::new();
        for i in 1..=5 {
            body.push_str(&format!("<h2>Step {}</h2>", i));
        }
        body.push_str(&format!("<p>{}</p>", simple_sentences(words / 3)));
        for i in 0..3 {
            body.push_str(&format!(r#" <a href="/blog/rel-{}">related post</a>"#, i));
        }
        body.push_str(r#" <a href="https://example.org/ref">reference</a>"#);
        for i in 0..5 {
            body.push_str(&format!(r#"<img src="/i{}.jpg" alt="step photo">"#, i));
        }
        let post = Post {
            id: "m".to_string(),
            title: "Monotonic".to_string(),
            content: body,
            seo_title: Some("A Title Long Enough To Clear The Length Gate".to_string()),
            seo_description: Some(
                "A meta description written to land comfortably inside the hundred \
                 twenty five to one fifty five character window for snippets."
                    .to_string(),
            ),
            ..Default::default()
        };
        analyze_content_quality(&post, ContentType::Diy).score
    };

    // Diy band: min 1000, ideal 1500.
    let scores: Vec<u32> = [600, 900, 1100, 1400, 1600].iter().map(|w| score_at(*w)).collect();
    for pair in scores.windows(2) {
        assert!(pair[0] <= pair[1], "scores decreased: {:?}", scores);
    }
}

#[test]
fn double_h1_is_penalized_even_with_good_structure() {
    let mut body = String::from("<h1>Main</h1><h1>Second</h1>");
    for i in 1..=5 {
        body.push_str(&format!("<h2>Part {}</h2>", i));
    }
    body.push_str(&format!("<p>{}</p>", simple_sentences(300)));
    let post = Post { id: "h".into(), title: "H".into(), content: body, ..Default::default() };
    let report = analyze_content_quality(&post, ContentType::Recipe);
    assert!(report.issues.iter().any(|i| i.contains("H1")));
    assert!(report.score <= 90);
}

#[test]
fn content_type_inference_priority() {
    let tags = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    assert_eq!(ContentType::from_tags(&tags(&["breaking-news", "recipe"])), ContentType::News);
    assert_eq!(ContentType::from_tags(&tags(&["diy", "recipe"])), ContentType::Diy);
    assert_eq!(ContentType::from_tags(&tags(&["recipe"])), ContentType::Recipe);
    assert_eq!(ContentType::from_tags(&tags(&["travel"])), ContentType::Blog);
    assert_eq!(ContentType::from_tags(&[]), ContentType::Blog);
}

#[test]
fn batch_analysis_aggregates_real_reports() {
    let posts = vec![
        excellent_blog_post(),
        Post { id: "empty".into(), title: "Empty".into(), ..Default::default() },
        Post {
            id: "bare".into(),
            title: "Bare".into(),
            content: "<p>short note</p>".into(),
            tags: vec!["recipe".to_string()],
            ..Default::default()
        },
    ];

    let batch = batch_analyze_quality(&posts);
    assert_eq!(batch.total, 3);
    assert_eq!(batch.results.len(), 3);

    let mean: f64 = batch.results.iter().map(|r| r.report.score as f64).sum::<f64>() / 3.0;
    assert_eq!(batch.avg_score, mean.round() as u32);

    let buckets = batch.distribution.excellent
        + batch.distribution.very_good
        + batch.distribution.good
        + batch.distribution.fair
        + batch.distribution.poor;
    assert_eq!(buckets, 3);

    assert!(!batch.top_issues.is_empty());
    assert!(batch.top_issues.len() <= 5);
    // Both weak posts lack images, so that issue must be grouped.
    assert!(batch
        .top_issues
        .iter()
        .any(|i| i.issue.contains("No images") && i.count >= 2));
}
