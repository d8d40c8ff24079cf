// src/core/net.rs
// Blocking HTTP GET behind a small trait, plus the paced fetcher every
// outbound request goes through.

use std::{thread, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT, USER_AGENT};
use crate::error::{Result, ScrapeError};

/// Raw answer of one GET.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// `GET(url) -> (status, bytes)`. Network failures are errors; any status
/// the server sends back is a `Response`.
pub trait Transport {
    fn get(&mut self, url: &str) -> Result<Response>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&mut self, url: &str) -> Result<Response> {
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();
        Ok(Response { status, body })
    }
}

/// Where the pacing floor spends its time. Swapped out in tests.
pub trait Sleep {
    fn sleep(&mut self, d: Duration);
}

pub struct ThreadSleep;

impl Sleep for ThreadSleep {
    fn sleep(&mut self, d: Duration) {
        if !d.is_zero() {
            thread::sleep(d);
        }
    }
}

/// Waits `pause` before *every* request, first one included, then issues it.
/// No retries: a transport error or non-2xx status goes straight back to
/// the caller.
pub struct PacedFetcher<T, S = ThreadSleep> {
    transport: T,
    sleeper: S,
    pause: Duration,
    requests: usize,
}

impl<T: Transport> PacedFetcher<T, ThreadSleep> {
    pub fn new(transport: T, pause: Duration) -> Self {
        Self::with_sleeper(transport, ThreadSleep, pause)
    }
}

impl<T: Transport, S: Sleep> PacedFetcher<T, S> {
    pub fn with_sleeper(transport: T, sleeper: S, pause: Duration) -> Self {
        Self { transport, sleeper, pause, requests: 0 }
    }

    pub fn fetch(&mut self, url: &str) -> Result<Vec<u8>> {
        self.sleeper.sleep(self.pause);
        self.requests += 1;
        logd!("GET {url}");

        let resp = self.transport.get(url)?;
        if !resp.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: resp.status });
        }
        Ok(resp.body)
    }

    /// Requests issued so far, failed ones included.
    pub fn requests(&self) -> usize {
        self.requests
    }
}
