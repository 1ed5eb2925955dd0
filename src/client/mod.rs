use std::sync::Arc;

use cosmrs::rpc::HttpClient as JsonRpcClient;
use reqwest::Client as LcdHttpClient;

use crate::config::Node;

use self::error::Result;

pub mod error;

/// Shared transport handle over the node's LCD and JSON RPC
/// interfaces. Cloning is cheap; a single handle is safe for
/// concurrent use by multiple in-flight pipelines.
#[derive(Debug, Clone)]
pub struct Client {
    lcd: LcdHttpClient,
    lcd_url: Arc<str>,
    json_rpc: Arc<JsonRpcClient>,
}

impl Client {
    pub fn new(
        lcd_url: &str,
        json_rpc_url: &str,
        http_timeout: Option<std::time::Duration>,
    ) -> Result<Self> {
        let lcd = match http_timeout {
            Some(timeout) => LcdHttpClient::builder().timeout(timeout).build()?,
            None => LcdHttpClient::new(),
        };

        Ok(Self {
            lcd,
            lcd_url: lcd_url.trim_end_matches('/').into(),
            json_rpc: Arc::new(JsonRpcClient::new(json_rpc_url)?),
        })
    }

    pub fn from_config(config: &Node) -> Result<Self> {
        Self::new(
            config.lcd_url(),
            config.json_rpc_url(),
            config.http_timeout(),
        )
    }

    #[must_use]
    pub fn http(&self) -> &LcdHttpClient {
        &self.lcd
    }

    #[must_use]
    pub fn lcd_url(&self) -> &str {
        &self.lcd_url
    }

    #[must_use]
    pub fn json_rpc(&self) -> &JsonRpcClient {
        &self.json_rpc
    }
}
