//! Purchase configuration.
//!
//! The legal-age threshold and the purchase currency vary by jurisdiction and
//! storefront, so they are injected into [`crate::Purchase::with_policy`]
//! rather than hard-coded.

use serde::{Deserialize, Serialize};

use shopfront_core::{Currency, DomainError, DomainResult};
use shopfront_parties::LEGAL_AGE;

/// Environment variable overriding [`PurchasePolicy::legal_age`].
pub const LEGAL_AGE_ENV: &str = "SHOPFRONT_LEGAL_AGE";

/// Environment variable overriding [`PurchasePolicy::currency`].
pub const CURRENCY_ENV: &str = "SHOPFRONT_CURRENCY";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchasePolicy {
    /// Minimum customer age allowed to open a purchase.
    pub legal_age: u32,
    /// Currency every purchase total is kept in.
    pub currency: Currency,
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self {
            legal_age: LEGAL_AGE,
            currency: Currency::PLN,
        }
    }
}

impl PurchasePolicy {
    /// Build a policy from the process environment, falling back to defaults
    /// for unset variables.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a policy from an arbitrary key lookup (env-like).
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut policy = Self::default();

        if let Some(raw) = lookup(LEGAL_AGE_ENV) {
            policy.legal_age = raw.trim().parse().map_err(|e| {
                DomainError::validation(format!("{LEGAL_AGE_ENV}={raw:?}: {e}"))
            })?;
        }

        if let Some(raw) = lookup(CURRENCY_ENV) {
            policy.currency = Currency::new(raw.trim())?;
        }

        tracing::debug!(
            legal_age = policy.legal_age,
            currency = %policy.currency,
            "purchase policy loaded"
        );

        Ok(policy)
    }
}
