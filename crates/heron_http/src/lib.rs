use std::error::Error;
use std::fmt::{Display, Formatter};

use anyhow::{anyhow, Result};
use awc::http::StatusCode;
use awc::{Client, ClientRequest, SendClientRequest};
use heron_config::definitions::TOOL_NAME;
use serde::Serialize;
use tracing::debug;

#[derive(Debug)]
pub struct RequestError {
    pub text: String,
    pub status: StatusCode,
}

impl RequestError {
    pub fn new(text: &str, status: StatusCode) -> Self {
        Self {
            text: text.to_owned(),
            status,
        }
    }
}

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "response {}: {}", self.status, self.text)
    }
}

impl Error for RequestError {}

pub struct Request {
    request: ClientRequest,
}

impl Request {
    pub fn post(url: &str) -> Self {
        Self {
            request: Client::new().post(url).insert_header(("User-Agent", TOOL_NAME)),
        }
    }

    pub fn delete(url: &str) -> Self {
        Self {
            request: Client::new()
                .delete(url)
                .insert_header(("User-Agent", TOOL_NAME)),
        }
    }

    pub fn query<T: Serialize>(mut self, value: &T) -> Result<Self> {
        self.request = self.request.query(value)?;
        Ok(self)
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.request = self.request.insert_header((key, value));
        self
    }

    pub async fn text(self) -> Result<String> {
        debug!("sending {} request to {}", self.request.get_method(), self.request.get_uri());
        let send_request = self.request.send();
        Self::request_with_text(send_request).await
    }

    async fn request_with_text(send_request: SendClientRequest) -> Result<String> {
        let mut response = send_request.await.map_err(|e| anyhow!(e.to_string()))?;
        let status = response.status();
        debug!("response from server status: {status}");

        let body = response.body().await.map_err(|e| anyhow!(e))?;
        let text = String::from_utf8_lossy(&body).to_string();

        if status.is_success() {
            Ok(text)
        } else if text.trim().is_empty() {
            let message = format!("request failed with status code: {status}");
            Err(RequestError::new(&message, status).into())
        } else {
            Err(RequestError::new(&text, status).into())
        }
    }
}
