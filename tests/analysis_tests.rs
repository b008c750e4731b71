//! End-to-end tests for the analysis pipeline
//!
//! These tests use wiremock to serve pages, link targets and the speed
//! service, and in-process transports where call counts matter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use sumi_lens::config::{load_config, Config, DensityConfig, Strategy};
use sumi_lens::document::Document;
use sumi_lens::fetch::{FetchError, PageSnapshot, Transport};
use sumi_lens::links::LinkOutcome;
use sumi_lens::output::to_json;
use sumi_lens::signals::{PageSignals, SignalExtractor, StandardExtractor};
use sumi_lens::speed::ScoreOutcome;
use sumi_lens::{AnalysisOutcome, Analyzer};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 250 words of topical paragraph text
fn body_text() -> String {
    "tomato garden compost mulch seedling ".repeat(50)
}

/// Title "A", no description, no H1, two images without alt text and a
/// single internal link
fn scenario_page() -> String {
    format!(
        r#"<html><head><title>A</title></head><body>
        <p>{}</p>
        <img src="/one.png"><img src="/two.png" alt="">
        <a href="/about">About</a>
        </body></html>"#,
        body_text()
    )
}

async fn mount_page(server: &MockServer, route: &str, markup: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(markup)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

fn completed(outcome: AnalysisOutcome) -> sumi_lens::AnalysisReport {
    match outcome {
        AnalysisOutcome::Completed(report) => report,
        AnalysisOutcome::FetchFailed { error, .. } => panic!("unexpected fetch failure: {}", error),
    }
}

#[tokio::test]
async fn test_scenario_page_report() {
    let server = MockServer::start().await;
    mount_page(&server, "/", scenario_page()).await;
    Mock::given(method("HEAD"))
        .and(path("/about"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let analyzer = Analyzer::new(Config::default()).unwrap();
    let report = completed(
        analyzer
            .analyze(&format!("{}/", server.uri()))
            .await
            .unwrap(),
    );

    assert_eq!(report.meta.title.as_deref(), Some("A"));
    assert_eq!(report.meta.description, None);
    assert_eq!(report.on_page.h1_count, 0);
    assert_eq!(report.on_page.images_missing_alt, 2);
    assert_eq!(report.content.word_count, 250);
    assert_eq!(report.internal_links, 1);
    assert_eq!(report.links_checked, 1);
    assert!(report.broken_links.is_empty());
    assert_eq!(report.speed.external, ScoreOutcome::NotRequested);

    let terms: Vec<&str> = report
        .keyword_density
        .iter()
        .map(|k| k.term.as_str())
        .collect();
    assert_eq!(terms, ["tomato", "garden", "compost", "mulch", "seedling"]);
    assert!(report
        .keyword_density
        .iter()
        .all(|k| (k.percentage - 20.0).abs() < 1e-9));

    let expected = [
        "Add a meta description",
        "Consider adding a meta keywords tag",
        "Add one H1 tag",
        "Add alt text to 2 image(s)",
        "Increase content length",
        "Add more internal links",
    ];
    for (rec, prefix) in report.recommendations.iter().zip(expected) {
        assert!(rec.starts_with(prefix), "{:?} should start with {:?}", rec, prefix);
    }
    assert!(!report
        .recommendations
        .iter()
        .any(|r| r.contains("broken link") || r.contains("Page speed is poor")));
}

#[tokio::test]
async fn test_fetch_failure_is_reported_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let analyzer = Analyzer::new(Config::default()).unwrap();
    let url = format!("{}/", server.uri());
    let outcome = analyzer.analyze(&url).await.unwrap();

    assert_eq!(
        outcome,
        AnalysisOutcome::FetchFailed {
            url,
            error: "Failed to fetch page: HTTP status 500".to_string(),
        }
    );
}

#[tokio::test]
async fn test_broken_and_slow_links() {
    let server = MockServer::start().await;
    let page = r#"<html><body>
        <a href="/gone">Gone</a>
        <a href="/slow">Slow</a>
        <a href="/fine">Fine</a>
        <a href="/gone#again">Gone again</a>
        <a href="mailto:someone@example.com">Mail</a>
        </body></html>"#;
    mount_page(&server, "/", page.to_string()).await;
    Mock::given(method("HEAD"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/fine"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.links.probe_timeout_secs = 1;
    let analyzer = Analyzer::new(config).unwrap();
    let report = completed(
        analyzer
            .analyze(&format!("{}/", server.uri()))
            .await
            .unwrap(),
    );

    assert_eq!(report.links_checked, 3);
    let statuses: Vec<(String, LinkOutcome)> = report
        .broken_links
        .iter()
        .map(|l| (Url::parse(&l.url).unwrap().path().to_string(), l.status))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("/gone".to_string(), LinkOutcome::Status(404)),
            ("/slow".to_string(), LinkOutcome::Unreachable),
        ]
    );

    let link_recs: Vec<&String> = report
        .recommendations
        .iter()
        .filter(|r| r.starts_with("Fix or remove broken link"))
        .collect();
    assert_eq!(link_recs.len(), 2);
    assert!(link_recs[1].ends_with("(status: Failed to connect)."));
}

#[tokio::test]
async fn test_speed_score_from_service() {
    let server = MockServer::start().await;
    mount_page(&server, "/", scenario_page()).await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pagespeed"))
        .and(query_param("key", "test-key"))
        .and(query_param("strategy", "mobile"))
        .and(query_param("category", "performance"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"lighthouseResult": {
                "categories": {"performance": {"score": 0.42}},
                "audits": {
                    "render-blocking-resources": {"title": "Eliminate render-blocking resources", "score": 0.3},
                    "uses-text-compression": {"title": "Enable text compression", "score": 1.0}
                }
            }}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.speed.api_key = Some("test-key".to_string());
    config.speed.strategy = Strategy::Mobile;
    config.speed.endpoint = format!("{}/pagespeed", server.uri());

    let analyzer = Analyzer::new(config).unwrap();
    let report = completed(
        analyzer
            .analyze(&format!("{}/", server.uri()))
            .await
            .unwrap(),
    );

    let ScoreOutcome::Scored { score, hints } = &report.speed.external else {
        panic!("expected a score, got {:?}", report.speed.external);
    };
    assert_eq!(*score, 42);
    assert_eq!(hints.len(), 1);
    assert_eq!(hints[0].title, "Eliminate render-blocking resources");
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.starts_with("Page speed is poor (performance score 42/100)")));
}

#[tokio::test]
async fn test_speed_service_failure_keeps_local_signals() {
    let server = MockServer::start().await;
    mount_page(&server, "/", scenario_page()).await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pagespeed"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.speed.api_key = Some("test-key".to_string());
    config.speed.endpoint = format!("{}/pagespeed", server.uri());

    let analyzer = Analyzer::new(config).unwrap();
    let report = completed(
        analyzer
            .analyze(&format!("{}/", server.uri()))
            .await
            .unwrap(),
    );

    assert!(matches!(
        report.speed.external,
        ScoreOutcome::Unavailable { .. }
    ));
    assert_eq!(report.content.word_count, 250);
    assert_eq!(report.on_page.images_missing_alt, 2);
}

#[tokio::test]
async fn test_config_file_drives_analysis() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        r#"<p>big big big cat cat ox</p>
           <a href="/a">a</a><a href="/b">b</a><a href="/c">c</a>"#
            .to_string(),
    )
    .await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[links]\nmax-links = 2\n\n[density]\nmin-length = 2\n"
    )
    .unwrap();
    let config = load_config(file.path()).unwrap();

    let analyzer = Analyzer::new(config).unwrap();
    let report = completed(
        analyzer
            .analyze(&format!("{}/", server.uri()))
            .await
            .unwrap(),
    );

    assert_eq!(report.links_checked, 2);
    let terms: Vec<&str> = report
        .keyword_density
        .iter()
        .map(|k| k.term.as_str())
        .collect();
    assert_eq!(terms, ["big", "cat", "ox"]);
}

/// Serves pages from memory and counts HEAD probes
#[derive(Default)]
struct MemoryTransport {
    pages: HashMap<String, String>,
    probes: AtomicUsize,
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn get(&self, url: &Url, _timeout: Duration) -> Result<String, FetchError> {
        self.pages
            .get(url.path())
            .cloned()
            .ok_or(FetchError::Status(404))
    }

    async fn head(&self, _url: &Url, _timeout: Duration) -> Result<u16, FetchError> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        Ok(200)
    }
}

/// Delegates to the standard extractors and counts invocations
#[derive(Default)]
struct CountingExtractor {
    calls: AtomicUsize,
}

impl SignalExtractor for CountingExtractor {
    fn extract(&self, document: &Document, page_url: &Url, density: &DensityConfig) -> PageSignals {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StandardExtractor.extract(document, page_url, density)
    }
}

fn memory_analyzer(
    pages: &[(&str, String)],
    config: Config,
) -> (Arc<MemoryTransport>, Analyzer<CountingExtractor>) {
    let transport = Arc::new(MemoryTransport {
        pages: pages
            .iter()
            .map(|(p, markup)| (p.to_string(), markup.clone()))
            .collect(),
        ..Default::default()
    });
    let analyzer =
        Analyzer::with_parts(config, transport.clone(), CountingExtractor::default()).unwrap();
    (transport, analyzer)
}

#[tokio::test]
async fn test_failed_fetch_runs_no_extractor() {
    let (transport, analyzer) = memory_analyzer(&[], Config::default());

    let outcome = analyzer.analyze("https://example.com/missing").await.unwrap();

    assert!(outcome.is_failure());
    assert_eq!(analyzer.extractor().calls.load(Ordering::SeqCst), 0);
    assert_eq!(transport.probes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_successful_fetch_runs_extractor_once() {
    let (_, analyzer) = memory_analyzer(&[("/", scenario_page())], Config::default());

    let outcome = analyzer.analyze("https://example.com/").await.unwrap();

    assert!(!outcome.is_failure());
    assert_eq!(analyzer.extractor().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_link_cap_is_exact() {
    let links: String = (0..15)
        .map(|i| format!(r#"<a href="https://other.example/{}">{}</a>"#, i, i))
        .collect();
    let mut config = Config::default();
    config.links.max_links = 10;
    let (transport, analyzer) = memory_analyzer(&[("/", links)], config);

    let report = completed(analyzer.analyze("https://example.com/").await.unwrap());

    assert_eq!(report.links_checked, 10);
    assert_eq!(transport.probes.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn test_page_without_links() {
    let (transport, analyzer) =
        memory_analyzer(&[("/", "<p>No anchors here</p>".to_string())], Config::default());

    let report = completed(analyzer.analyze("https://example.com/").await.unwrap());

    assert_eq!(report.links_checked, 0);
    assert!(report.broken_links.is_empty());
    assert_eq!(transport.probes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_same_snapshot_same_report() {
    let (_, analyzer) = memory_analyzer(&[], Config::default());
    let snapshot = PageSnapshot::Fetched {
        url: Url::parse("https://example.com/").unwrap(),
        markup: scenario_page(),
        latency: Duration::from_millis(850),
    };

    let first = to_json(&analyzer.analyze_snapshot(snapshot.clone()).await).unwrap();
    let second = to_json(&analyzer.analyze_snapshot(snapshot).await).unwrap();

    assert_eq!(first, second);
    assert!(first.contains("\"response_time\": 0.85"));
}
