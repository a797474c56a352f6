//! WhatsOnChain-style block explorer client.
//!
//! Implements the read and submit side of token flows against the
//! public explorer API: transaction lookup, raw broadcast, token
//! metadata and per-address token balances.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use stas_script::Address;
use stas_tokens::script::reader::parse_stas;

use crate::error::ChainError;
use crate::traits::{BalanceQuery, LedgerQuery, TokenIndex};
use crate::types::{AddressTokens, ChainTx, ExplorerConfig, TokenDetail, UnspentOutput};

/// Header carrying the explorer API key.
const API_KEY_HEADER: &str = "woc-api-key";

/// HTTP client for a WhatsOnChain-compatible explorer API.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    /// Client configuration.
    config: ExplorerConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

/// Wrapper the token endpoint puts around [`TokenDetail`].
#[derive(Deserialize)]
struct TokenDetailEnvelope {
    token: TokenDetail,
}

impl ExplorerClient {
    /// Create a new explorer client with the given configuration.
    pub fn new(config: ExplorerConfig) -> Self {
        let client = reqwest::Client::new();
        Self { config, client }
    }

    /// Fetch the raw hex serialization of a transaction.
    pub async fn raw_transaction_hex(&self, txid: &str) -> Result<String, ChainError> {
        let path = format!("tx/{}/hex", txid);
        self.get_text(&path).await
    }

    /// List the unspent outputs of an address.
    pub async fn address_unspent(
        &self,
        address: &Address,
    ) -> Result<Vec<UnspentOutput>, ChainError> {
        let path = format!("address/{}/unspent", address);
        self.do_request(&path).await
    }

    /// Perform a GET request against the explorer and deserialize the
    /// response.
    async fn do_request<T: DeserializeOwned>(&self, path: &str) -> Result<T, ChainError> {
        let text = self.get_text(path).await?;
        let parsed = serde_json::from_str(&text)?;
        Ok(parsed)
    }

    /// Perform a GET request and return the response body.
    async fn get_text(&self, path: &str) -> Result<String, ChainError> {
        let url = self.url(path);
        let headers = self.build_headers();

        let resp = self.client.get(&url).headers(headers).send().await?;

        let status = resp.status();

        if status.as_u16() == 404 {
            return Err(ChainError::NotFound);
        }

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ChainError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.text().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.config.base_url, self.config.network, path)
    }

    /// Build common headers from config.
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(ref key) = self.config.api_key {
            if let Ok(val) = HeaderValue::from_str(key) {
                headers.insert(API_KEY_HEADER, val);
            }
        }

        headers
    }
}

#[async_trait]
impl LedgerQuery for ExplorerClient {
    async fn fetch_transaction(&self, txid: &str) -> Result<ChainTx, ChainError> {
        let path = format!("tx/hash/{}", txid);
        self.do_request(&path).await
    }

    async fn broadcast(&self, raw_tx_hex: &str) -> Result<String, ChainError> {
        let url = self.url("tx/raw");
        let headers = self.build_headers();

        let resp = self
            .client
            .post(&url)
            .headers(headers)
            .json(&serde_json::json!({ "txhex": raw_tx_hex }))
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        // the txid comes back as a JSON string, refusals as plain text
        let body = body.trim().trim_matches('"').to_string();

        if !status.is_success() {
            return Err(ChainError::Rejected {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl TokenIndex for ExplorerClient {
    async fn token_id_for(&self, txid: &str) -> Result<Option<String>, ChainError> {
        let tx: ChainTx = self.do_request(&format!("tx/hash/{}", txid)).await?;
        for out in &tx.vout {
            let Ok(bytes) = hex::decode(&out.script_pub_key.hex) else {
                continue;
            };
            if let Some(fields) = parse_stas(&bytes) {
                return Ok(Some(fields.token_id().to_string()));
            }
        }
        Ok(None)
    }

    async fn token_detail(
        &self,
        token_id: &str,
        symbol: &str,
    ) -> Result<TokenDetail, ChainError> {
        let path = format!("token/{}/{}", token_id, symbol);
        let envelope: TokenDetailEnvelope = self.do_request(&path).await?;
        Ok(envelope.token)
    }
}

#[async_trait]
impl BalanceQuery for ExplorerClient {
    async fn token_balance(&self, address: &Address) -> Result<u64, ChainError> {
        let path = format!("address/{}/tokens", address);
        match self.do_request::<AddressTokens>(&path).await {
            Ok(holdings) => Ok(holdings.tokens.iter().map(|t| t.balance).sum()),
            // the explorer 404s addresses it has never seen
            Err(ChainError::NotFound) => Ok(0),
            Err(e) => Err(e),
        }
    }
}
