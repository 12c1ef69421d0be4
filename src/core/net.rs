// src/core/net.rs
// One blocking GET. No retries, no request timeout.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::ScanError;

/// Raw response: status code plus the decoded body.
#[derive(Clone, Debug)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

/// Anything that can perform a GET. Tests plug in canned pages.
pub trait Transport {
    fn get(&self, url: &str) -> Result<Page, ScanError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self, ScanError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Page, ScanError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        debug!(status, bytes = body.len(), "GET {url}");
        Ok(Page { status, body })
    }
}

/// GET `url` and return the body, or a `Network` error if the status is not 200.
pub fn fetch_page<T: Transport + ?Sized>(transport: &T, url: &str) -> Result<String, ScanError> {
    info!("fetching {url}");
    let page = transport.get(url)?;
    if page.status != 200 {
        return Err(ScanError::network(format!(
            "Failed to fetch data: HTTP {}",
            page.status
        )));
    }
    Ok(page.body)
}
