//! Eventual-consistency polling.
//!
//! Indexers lag behind broadcasts, so balance and lookup checks retry
//! on an interval the caller controls rather than sleeping a fixed
//! time.

use std::future::Future;
use std::time::Duration;

use stas_script::Address;

use crate::error::ChainError;
use crate::traits::BalanceQuery;

/// Retry schedule for [`until`].
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Maximum number of probe attempts.
    pub attempts: u32,
    /// Pause between attempts.
    pub delay: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        PollConfig {
            attempts: 20,
            delay: Duration::from_millis(500),
        }
    }
}

/// Run `probe` until it yields a value or the attempts run out.
///
/// The probe reports `Ok(None)` for "not yet"; the first `Ok(Some(_))`
/// ends the poll. Probe errors abort immediately.
///
/// # Errors
/// [`ChainError::Timeout`] when every attempt came back empty; any
/// error the probe itself returns.
pub async fn until<T, F, Fut>(config: &PollConfig, mut probe: F) -> Result<T, ChainError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, ChainError>>,
{
    for attempt in 0..config.attempts {
        if attempt > 0 {
            tokio::time::sleep(config.delay).await;
        }
        if let Some(value) = probe().await? {
            return Ok(value);
        }
    }
    Err(ChainError::Timeout(config.attempts))
}

/// Poll until `address` holds exactly `expected` token satoshis.
///
/// Returns `Ok(true)` once the balance matches and `Ok(false)` when the
/// attempts run out first.
///
/// # Errors
/// Any error the underlying balance query returns.
pub async fn is_token_balance(
    query: &dyn BalanceQuery,
    address: &Address,
    expected: u64,
    config: &PollConfig,
) -> Result<bool, ChainError> {
    let outcome = until(config, move || async move {
        let balance = query.token_balance(address).await?;
        Ok((balance == expected).then_some(()))
    })
    .await;

    match outcome {
        Ok(()) => Ok(true),
        Err(ChainError::Timeout(_)) => Ok(false),
        Err(e) => Err(e),
    }
}
