//! Account entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::types::{AccountId, UserId};

use super::error::DomainError;

/// Role an account plays in transfer semantics.
///
/// Each owner holds exactly one account per role; the role is immutable
/// after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// Day-to-day spending account, source of savings fundings.
    Checking,
    /// Savings account, destination of fundings.
    Savings,
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checking => write!(f, "checking"),
            Self::Savings => write!(f, "savings"),
        }
    }
}

/// A money account exclusively scoped to one owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Account role.
    pub role: AccountRole,
    /// Balance at account creation.
    pub opening_balance: Decimal,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account, validating structural well-formedness.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyAccountName` if the name is blank.
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        role: AccountRole,
        opening_balance: Decimal,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyAccountName);
        }

        Ok(Self {
            id: AccountId::new(),
            user_id,
            name,
            role,
            opening_balance,
            created_at,
        })
    }
}
