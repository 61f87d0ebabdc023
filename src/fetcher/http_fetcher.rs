use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use reqwest::{redirect, Client};
use url::Url;

use crate::app::{IconhoundError, Result};
use crate::fetcher::{Fetched, Fetcher, RequestOptions};

pub const MAX_REDIRECTS: usize = 5;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

const ACCEPT_VALUE: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,\
     image/avif,image/webp,image/apng,image/svg+xml,image/*,*/*;q=0.8";

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .default_headers(default_headers())
            .build()?;

        Ok(Self { client })
    }
}

/// The browser-like header set sent with every request, minus the User-Agent.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert("sec-fetch-dest", HeaderValue::from_static("document"));
    headers.insert("sec-fetch-mode", HeaderValue::from_static("navigate"));
    headers.insert("sec-fetch-site", HeaderValue::from_static("none"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    headers
}

fn user_agent(options: &RequestOptions) -> HeaderValue {
    options
        .user_agent
        .as_deref()
        .and_then(|ua| HeaderValue::from_str(ua).ok())
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_USER_AGENT))
}

fn classify(url: &Url, err: reqwest::Error) -> IconhoundError {
    if err.is_timeout() {
        IconhoundError::Timeout {
            url: url.to_string(),
        }
    } else {
        IconhoundError::Http(err)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url, options: &RequestOptions) -> Result<Fetched> {
        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, user_agent(options))
            .timeout(options.timeout)
            .send()
            .await
            .map_err(|e| classify(url, e))?;

        let status = response.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(IconhoundError::HttpStatus {
                url: response.url().to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let body = response.bytes().await.map_err(|e| classify(url, e))?.to_vec();

        Ok(Fetched {
            url: final_url,
            status: status.as_u16(),
            body,
        })
    }
}
