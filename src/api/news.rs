//! Headlines from NewsAPI.

use serde::Deserialize;
use tracing::warn;

use super::{fetch_json, ApiOutcome, Provider, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub title: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Headlines {
    pub topic: String,
    pub articles: Vec<Headline>,
}

#[derive(Deserialize)]
struct NewsResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Deserialize)]
struct Article {
    title: Option<String>,
    source: Option<Source>,
}

#[derive(Deserialize)]
struct Source {
    name: Option<String>,
}

impl From<Article> for Headline {
    fn from(article: Article) -> Self {
        Headline {
            title: article.title.unwrap_or_else(|| "Untitled".to_string()),
            source: article
                .source
                .and_then(|s| s.name)
                .unwrap_or_else(|| "unknown source".to_string()),
        }
    }
}

/// Fetch at most `limit` headlines about `topic`.
pub fn fetch(
    transport: &dyn Transport,
    base: &str,
    key: Option<&str>,
    topic: &str,
    limit: usize,
) -> ApiOutcome<Headlines> {
    let Some(key) = key else {
        return ApiOutcome::ConfigMissing;
    };

    let page_size = limit.to_string();
    let Some(response) = fetch_json::<NewsResponse>(
        transport,
        Provider::News,
        base,
        &["v2", "everything"],
        &[("q", topic), ("pageSize", page_size.as_str()), ("apiKey", key)],
    ) else {
        return ApiOutcome::UpstreamFailure;
    };

    if response.status != "ok" {
        warn!(
            provider = "news",
            status = %response.status,
            message = response.message.as_deref().unwrap_or_default(),
            "news request was not successful"
        );
        return ApiOutcome::UpstreamFailure;
    }

    if response.articles.is_empty() {
        return ApiOutcome::EmptyResult;
    }

    ApiOutcome::Success(Headlines {
        topic: topic.to_string(),
        articles: response
            .articles
            .into_iter()
            .take(limit)
            .map(Headline::from)
            .collect(),
    })
}
