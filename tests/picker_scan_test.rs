use lingo_digest::config::DigestConfig;
use lingo_digest::picker::FeedPicker;
use lingo_digest::{ArticleFetcher, Lang};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const PARAGRAPH: &str = "The government announced a sweeping new economic policy on Monday, \
    promising broad support for small businesses across the country. Officials said the \
    program would expand access to credit, simplify licensing requirements, and reduce the \
    paperwork that has long burdened independent shops. Economists welcomed the move but \
    cautioned that the benefits would take months to reach the smallest firms, particularly \
    those in rural regions where banking services remain scarce.";

fn article_page(title: &str) -> String {
    format!(
        "<html><head><title>{title}</title></head><body><article><h1>{title}</h1>\
         <p>{p}</p><p>{p}</p></article></body></html>",
        title = title,
        p = PARAGRAPH
    )
}

fn rss_feed(items: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <rss version=\"2.0\"><channel><title>Test feed</title>{}</channel></rss>",
        items
    )
}

/// Bounds sized for the canned article pages below (roughly 950 chars).
fn scan_config() -> DigestConfig {
    DigestConfig {
        min_chars: 200,
        max_chars: 8000,
        ..DigestConfig::default()
    }
}

/// One-shot HTTP server over canned routes, recording every requested path.
struct TestServer {
    seen: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    fn requested(&self, path: &str) -> bool {
        self.seen.lock().unwrap().iter().any(|p| p == path)
    }
}

async fn bind() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    (listener, base)
}

fn start(listener: TcpListener, routes: HashMap<String, String>) -> TestServer {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let routes = Arc::new(routes);

    let seen_handle = seen.clone();
    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();
            let seen = seen_handle.clone();
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let path = request
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("/")
                    .to_string();
                seen.lock().unwrap().push(path.clone());

                let response = match routes.get(&path) {
                    Some(body) => format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\n\
                         Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    ),
                    None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\
                             Connection: close\r\n\r\n"
                        .to_string(),
                };
                let _ = stream.write_all(response.as_bytes()).await;
            });
        }
    });

    TestServer { seen }
}

#[tokio::test]
async fn scan_skips_linkless_entries_and_stops_at_first_accepted() {
    let (listener, base) = bind().await;
    let items = format!(
        "<item><title>No link</title></item>\
         <item><title>Good story</title><link>{base}/good</link></item>\
         <item><title>Later story</title><link>{base}/later</link></item>"
    );
    let mut routes = HashMap::new();
    routes.insert("/feed.xml".to_string(), rss_feed(&items));
    routes.insert("/good".to_string(), article_page("Good story"));
    routes.insert("/later".to_string(), article_page("Later story"));
    let server = start(listener, routes);

    let fetcher = ArticleFetcher::new();
    let config = scan_config();
    let picker = FeedPicker::new(&fetcher, &config);
    let feeds = vec![format!("{base}/feed.xml")];

    let pick = picker
        .pick_from_rss(&feeds, Lang::En)
        .await
        .expect("first acceptable entry should be picked");

    assert_eq!(pick.url, format!("{base}/good"));
    assert_eq!(pick.title, "Good story");
    assert_eq!(pick.lang, Lang::En);
    assert_eq!(pick.source, "127.0.0.1");
    assert!(server.requested("/good"));
    // first-acceptance: the scan stops before the next entry is fetched
    assert!(!server.requested("/later"));
}

#[tokio::test]
async fn scan_considers_at_most_ten_entries_per_feed() {
    let (listener, base) = bind().await;
    let mut items = String::new();
    for i in 0..10 {
        items.push_str(&format!(
            "<item><title>Entry {i}</title><link>{base}/missing-{i}</link></item>"
        ));
    }
    items.push_str(&format!(
        "<item><title>Eleventh</title><link>{base}/good</link></item>"
    ));
    let mut routes = HashMap::new();
    routes.insert("/feed.xml".to_string(), rss_feed(&items));
    routes.insert("/good".to_string(), article_page("Eleventh"));
    let server = start(listener, routes);

    let fetcher = ArticleFetcher::new();
    let config = scan_config();
    let picker = FeedPicker::new(&fetcher, &config);
    let feeds = vec![format!("{base}/feed.xml")];

    assert!(picker.pick_from_rss(&feeds, Lang::En).await.is_none());
    for i in 0..10 {
        assert!(server.requested(&format!("/missing-{i}")));
    }
    // the acceptable eleventh entry sits past the per-feed cap
    assert!(!server.requested("/good"));
}

#[tokio::test]
async fn scan_rejects_entries_whose_detected_language_mismatches() {
    let (listener, base) = bind().await;
    let items = format!("<item><title>Good story</title><link>{base}/good</link></item>");
    let mut routes = HashMap::new();
    routes.insert("/feed.xml".to_string(), rss_feed(&items));
    routes.insert("/good".to_string(), article_page("Good story"));
    let server = start(listener, routes);

    let fetcher = ArticleFetcher::new();
    let config = scan_config();
    let picker = FeedPicker::new(&fetcher, &config);
    let feeds = vec![format!("{base}/feed.xml")];

    // the article is English prose, so a ZH request walks past it
    assert!(picker.pick_from_rss(&feeds, Lang::Zh).await.is_none());
    assert!(server.requested("/good"));
}

#[tokio::test]
async fn scan_rejects_bodies_outside_length_bounds() {
    let (listener, base) = bind().await;
    let items = format!("<item><title>Good story</title><link>{base}/good</link></item>");
    let mut routes = HashMap::new();
    routes.insert("/feed.xml".to_string(), rss_feed(&items));
    routes.insert("/good".to_string(), article_page("Good story"));
    let server = start(listener, routes);

    let fetcher = ArticleFetcher::new();
    let config = DigestConfig {
        min_chars: 200,
        max_chars: 300,
        ..DigestConfig::default()
    };
    let picker = FeedPicker::new(&fetcher, &config);
    let feeds = vec![format!("{base}/feed.xml")];

    // same page passes with bounds [200, 8000]; here its ~950 chars overflow
    assert!(picker.pick_from_rss(&feeds, Lang::En).await.is_none());
    assert!(server.requested("/good"));
}
