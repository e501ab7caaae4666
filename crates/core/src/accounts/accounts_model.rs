//! Account domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::accounts_constants::{client_types, exclusion_flags};
use crate::entity::BusinessEntity;

/// A dashboard login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub login: String,
    pub user_name: String,
    pub client_id: i32,
    pub location_id: i32,
}

/// An investment account owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i32,
    pub user_id: i32,
    /// Reference shown to clients, e.g. `A10031907`
    pub account_reference: String,
    pub name: String,
    /// One of [`client_types`]
    pub client_type: String,
}

impl Account {
    pub fn is_direct_client(&self) -> bool {
        self.client_type == client_types::DIRECT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i32,
    pub isin: String,
    pub name: String,
}

/// A position of an asset inside an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHolding {
    pub id: i32,
    pub account_id: i32,
    pub asset_id: i32,
    pub units: Decimal,
    /// `"Yes"` when the holding is excluded from rebalancing
    pub exclude_from_rebalance: String,
    pub modified_by: Option<String>,
}

impl AccountHolding {
    pub fn is_excluded_from_rebalance(&self) -> bool {
        self.exclude_from_rebalance == exclusion_flags::YES
    }
}

/// Holding joined with the asset it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingWithAsset {
    pub holding: AccountHolding,
    pub asset: Asset,
}

/// Account together with its holdings, as loaded by the data builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountWithHoldings {
    pub account: Account,
    pub holdings: Vec<HoldingWithAsset>,
}

impl AccountWithHoldings {
    pub fn has_holdings(&self) -> bool {
        !self.holdings.is_empty()
    }
}

impl BusinessEntity for User {
    const ENTITY_NAME: &'static str = "User";

    fn entity_id(&self) -> i32 {
        self.id
    }
}

impl BusinessEntity for Account {
    const ENTITY_NAME: &'static str = "Account";

    fn entity_id(&self) -> i32 {
        self.id
    }
}

impl BusinessEntity for Asset {
    const ENTITY_NAME: &'static str = "Asset";

    fn entity_id(&self) -> i32 {
        self.id
    }
}

impl BusinessEntity for AccountHolding {
    const ENTITY_NAME: &'static str = "AccountHolding";

    fn entity_id(&self) -> i32 {
        self.id
    }
}
