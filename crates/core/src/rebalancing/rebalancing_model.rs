use serde::{Deserialize, Serialize};

use crate::accounts::{AccountWithHoldings, HoldingWithAsset};

/// Marks one asset as excluded from (or included in) automated rebalancing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludeAssetFromRebalanceModel {
    pub isin: String,
    pub exclude_from_rebalance: bool,
}

impl From<&HoldingWithAsset> for ExcludeAssetFromRebalanceModel {
    fn from(item: &HoldingWithAsset) -> Self {
        Self {
            isin: item.asset.isin.clone(),
            exclude_from_rebalance: item.holding.is_excluded_from_rebalance(),
        }
    }
}

/// Builds the exclusion list for every holding of an account, in holding order.
pub fn exclusion_list_for(account: &AccountWithHoldings) -> Vec<ExcludeAssetFromRebalanceModel> {
    account
        .holdings
        .iter()
        .map(ExcludeAssetFromRebalanceModel::from)
        .collect()
}
