//! Portfolio page fetching and markup reduction.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use crate::errors::AppError;
use crate::scoring::tables::page_keyword_hits;
use crate::signals::{FetchError, PageSignals};

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").expect("valid regex"));
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b.*?</style\s*>").expect("valid regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid regex"));
static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<a\b").expect("valid regex"));
static GITHUB_USER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([A-Za-z0-9_-]+)").expect("valid regex"));

/// Parses user input into an absolute http(s) URL.
pub fn normalize_url(input: &str) -> Result<Url, AppError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed)
        .map_err(|_| AppError::Validation(format!("'{trimmed}' is not a valid URL")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Validation(
            "Only http/https URLs are supported".to_string(),
        ));
    }
    Ok(url)
}

/// Extracts the account name from a `github.com/<user>` URL.
pub fn github_username_from_url(url: &str) -> Option<String> {
    GITHUB_USER_RE
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// GETs `url` and returns its body, refusing bodies over `max_bytes`.
pub async fn fetch_html(client: &Client, url: &Url, max_bytes: usize) -> Result<String, FetchError> {
    let mut response = client
        .get(url.clone())
        .header(ACCEPT, "text/html,application/xhtml+xml")
        .send()
        .await?
        .error_for_status()?;

    if response
        .content_length()
        .is_some_and(|len| len > max_bytes as u64)
    {
        return Err(FetchError::TooLarge { limit: max_bytes });
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > max_bytes {
            return Err(FetchError::TooLarge { limit: max_bytes });
        }
        body.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}

pub fn signals_from_html(html: &str) -> PageSignals {
    let text = strip_html(html);
    let word_count = text.split_whitespace().count() as u32;
    let keyword_hits = page_keyword_hits(&text);

    PageSignals {
        title: extract_title(html),
        text,
        word_count,
        link_count: ANCHOR_RE.find_iter(html).count() as u32,
        keyword_hits,
        fetched: true,
    }
}

/// Signals for a page we could not read: the URL string is the only evidence.
pub fn fallback_signals(url: &str) -> PageSignals {
    let text = url.to_lowercase();
    let word_count = text
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .count() as u32;
    let keyword_hits = page_keyword_hits(&text);

    PageSignals {
        title: "Profile".to_string(),
        text,
        word_count,
        link_count: 0,
        keyword_hits,
        fetched: false,
    }
}

fn strip_html(raw: &str) -> String {
    let without_scripts = SCRIPT_RE.replace_all(raw, " ");
    let without_styles = STYLE_RE.replace_all(&without_scripts, " ");
    let without_tags = TAG_RE.replace_all(&without_styles, " ");
    SPACE_RE
        .replace_all(&without_tags, " ")
        .trim()
        .to_lowercase()
}

fn extract_title(raw: &str) -> String {
    TITLE_RE
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| SPACE_RE.replace_all(m.as_str(), " ").trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| "Untitled Profile".to_string())
}

/// Picks a display name: the page title's first segment when it is meaningful,
/// otherwise the last path segment, otherwise the host.
pub fn display_name(url: &Url, title: &str) -> String {
    let cleaned = title
        .split('|')
        .next()
        .and_then(|s| s.split('-').next())
        .unwrap_or("")
        .trim();
    if cleaned.chars().count() >= 3
        && !cleaned.eq_ignore_ascii_case("home")
        && cleaned != "Untitled Profile"
        && cleaned != "Profile"
    {
        return cleaned.to_string();
    }

    if let Some(segment) = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
    {
        return segment.replace(['-', '_'], " ");
    }

    url.host_str()
        .map(|h| h.trim_start_matches("www.").to_string())
        .unwrap_or_else(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::skills::SkillDimension;

    const PORTFOLIO: &str = r#"
        <html><head><title>Ada Lovelace | Engineer</title>
        <style>.react { color: red }</style>
        <script>const react = "not counted";</script></head>
        <body>
          <h1>Projects</h1>
          <p>Built a React dashboard with TypeScript and a REST API in Node.</p>
          <a href="/one">one</a><A HREF="/two">two</A>
        </body></html>
    "#;

    #[test]
    fn test_normalize_url_accepts_http_and_https() {
        assert!(normalize_url("https://example.com/me").is_ok());
        assert!(normalize_url("  http://example.com  ").is_ok());
    }

    #[test]
    fn test_normalize_url_rejects_garbage_and_other_schemes() {
        assert!(matches!(
            normalize_url("not a url"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            normalize_url("ftp://example.com"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_strip_html_drops_scripts_styles_and_tags() {
        let text = strip_html(PORTFOLIO);
        assert!(!text.contains("not counted"));
        assert!(!text.contains("color"));
        assert!(!text.contains('<'));
        assert!(text.contains("built a react dashboard"));
    }

    #[test]
    fn test_signals_from_html_counts() {
        let signals = signals_from_html(PORTFOLIO);
        assert!(signals.fetched);
        assert_eq!(signals.title, "Ada Lovelace | Engineer");
        assert_eq!(signals.link_count, 2);
        // react appears once in body text; the script and style copies are gone
        let frontend = signals.keyword_hits.get(SkillDimension::Frontend);
        assert!(frontend.matched >= 2);
    }

    #[test]
    fn test_missing_title_defaults() {
        assert_eq!(extract_title("<p>hello</p>"), "Untitled Profile");
    }

    #[test]
    fn test_fallback_signals_use_url_tokens() {
        let signals = fallback_signals("https://Example.com/React-Dev");
        assert!(!signals.fetched);
        assert_eq!(signals.text, "https://example.com/react-dev");
        assert_eq!(signals.word_count, 5);
        assert_eq!(
            signals.keyword_hits.get(SkillDimension::Frontend).matched,
            1
        );
    }

    #[test]
    fn test_github_username_from_url() {
        assert_eq!(
            github_username_from_url("https://github.com/octo-cat_1/repo").as_deref(),
            Some("octo-cat_1")
        );
        assert_eq!(github_username_from_url("https://gitlab.com/x"), None);
    }

    #[test]
    fn test_display_name_prefers_title_then_path_then_host() {
        let url = Url::parse("https://www.example.com/jane-doe").unwrap();
        assert_eq!(display_name(&url, "Jane Doe | Portfolio"), "Jane Doe");
        assert_eq!(display_name(&url, "Home"), "jane doe");

        let bare = Url::parse("https://www.example.com/").unwrap();
        assert_eq!(display_name(&bare, "Profile"), "example.com");
    }
}
