//! Test-network faucet client.
//!
//! Asks a faucet service for coins and resolves the funding
//! transaction into spendable UTXO references via the explorer, so a
//! fresh key can go from nothing to fee-paying in one call.

use async_trait::async_trait;
use serde::Deserialize;

use stas_script::Address;
use stas_tokens::script::reader::{read_locking_script, ParsedScript};
use stas_tokens::Utxo;

use crate::error::ChainError;
use crate::explorer::ExplorerClient;
use crate::traits::{FundingSource, LedgerQuery};
use crate::types::FaucetConfig;

/// HTTP client for a `faucet/send/{address}` style faucet service.
#[derive(Debug, Clone)]
pub struct FaucetClient {
    /// Client configuration.
    config: FaucetConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
    /// Explorer used to resolve the funding transaction.
    explorer: ExplorerClient,
}

#[derive(Deserialize)]
struct FaucetResponse {
    txid: String,
}

impl FaucetClient {
    /// Create a faucet client. The explorer resolves funding
    /// transactions into UTXOs.
    pub fn new(config: FaucetConfig, explorer: ExplorerClient) -> Self {
        let client = reqwest::Client::new();
        Self {
            config,
            client,
            explorer,
        }
    }

    /// Ask the faucet to pay `address`, returning the funding txid.
    ///
    /// # Errors
    /// [`ChainError::InsufficientFunds`] when the faucet refuses,
    /// carrying the refusal status and body.
    pub async fn drip(&self, address: &Address) -> Result<String, ChainError> {
        let url = format!("{}/faucet/send/{}", self.config.base_url, address);

        let mut request = self.client.post(&url);
        if let (Some(user), Some(pass)) = (&self.config.username, &self.config.password) {
            request = request.basic_auth(user, Some(pass));
        }

        let resp = request.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ChainError::InsufficientFunds(format!(
                "faucet refused ({}): {}",
                status.as_u16(),
                message
            )));
        }

        let response: FaucetResponse = resp.json().await?;
        Ok(response.txid)
    }
}

#[async_trait]
impl FundingSource for FaucetClient {
    async fn request_funds(&self, address: &Address) -> Result<Vec<Utxo>, ChainError> {
        let txid = self.drip(address).await?;
        let tx = self.explorer.fetch_transaction(&txid).await?;

        let mut utxos = Vec::new();
        for out in &tx.vout {
            let utxo = tx.output_as_utxo(out.n)?;
            if let ParsedScript::P2pkh { owner_hash } =
                read_locking_script(utxo.locking_script.to_bytes())
            {
                if owner_hash == address.public_key_hash {
                    utxos.push(utxo);
                }
            }
        }

        if utxos.is_empty() {
            return Err(ChainError::InsufficientFunds(format!(
                "faucet transaction {} pays nothing to {}",
                txid, address
            )));
        }

        Ok(utxos)
    }
}
