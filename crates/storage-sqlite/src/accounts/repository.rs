use std::collections::HashMap;
use std::sync::Arc;

use diesel::prelude::*;
use log::debug;

use dashboard_core::accounts::{
    exclusion_flag, AccountHolding, AccountWithHoldings, HoldingWithAsset, User,
};
use dashboard_core::Result;

use super::model::{AccountDB, AccountHoldingDB, AssetDB, UserDB};
use crate::entities::DashboardEntities;
use crate::errors::IntoCore;
use crate::schema::{account_holdings, accounts, assets, users};

/// Queries and updates used by the data builders and the harness.
pub struct AccountsRepository {
    entities: Arc<DashboardEntities>,
}

impl AccountsRepository {
    pub fn new(entities: Arc<DashboardEntities>) -> Self {
        Self { entities }
    }

    /// All users, ordered by id.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut conn = self.entities.connection()?;

        let rows = users::table
            .select(UserDB::as_select())
            .order(users::id.asc())
            .load::<UserDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Users whose login matches exactly.
    pub fn find_users_by_login(&self, login: &str) -> Result<Vec<User>> {
        let mut conn = self.entities.connection()?;

        let rows = users::table
            .filter(users::login.eq(login))
            .select(UserDB::as_select())
            .order(users::id.asc())
            .load::<UserDB>(&mut conn)
            .into_core()?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Accounts of a user with their holdings and assets, ordered by id.
    pub fn accounts_with_holdings(&self, user_id: i32) -> Result<Vec<AccountWithHoldings>> {
        let mut conn = self.entities.connection()?;

        let account_rows = accounts::table
            .filter(accounts::user_id.eq(user_id))
            .select(AccountDB::as_select())
            .order(accounts::id.asc())
            .load::<AccountDB>(&mut conn)
            .into_core()?;

        let holding_rows = AccountHoldingDB::belonging_to(&account_rows)
            .inner_join(assets::table)
            .select((AccountHoldingDB::as_select(), AssetDB::as_select()))
            .order(account_holdings::id.asc())
            .load::<(AccountHoldingDB, AssetDB)>(&mut conn)
            .into_core()?;

        let mut holdings_by_account: HashMap<i32, Vec<HoldingWithAsset>> = HashMap::new();
        for (holding_db, asset_db) in holding_rows {
            let holding = AccountHolding::try_from(holding_db)?;
            holdings_by_account
                .entry(holding.account_id)
                .or_default()
                .push(HoldingWithAsset {
                    holding,
                    asset: asset_db.into(),
                });
        }

        debug!(
            "Loaded {} accounts for user {}",
            account_rows.len(),
            user_id
        );

        Ok(account_rows
            .into_iter()
            .map(|account_db| {
                let holdings = holdings_by_account
                    .remove(&account_db.id)
                    .unwrap_or_default();
                AccountWithHoldings {
                    account: account_db.into(),
                    holdings,
                }
            })
            .collect())
    }

    /// Sets the rebalance exclusion flag of the holding of `isin` in an account.
    ///
    /// The change is stamped with the user name of the handle's request
    /// context. Returns the number of updated holdings.
    pub fn set_excluded_from_rebalance(
        &self,
        account_id: i32,
        isin: &str,
        excluded: bool,
    ) -> Result<usize> {
        let mut conn = self.entities.connection()?;
        let modified_by = self.entities.request_context().user_name;

        let asset_ids = assets::table
            .filter(assets::isin.eq(isin))
            .select(assets::id);

        let updated = diesel::update(
            account_holdings::table
                .filter(account_holdings::account_id.eq(account_id))
                .filter(account_holdings::asset_id.eq_any(asset_ids)),
        )
        .set((
            account_holdings::exclude_from_rebalance.eq(exclusion_flag(excluded)),
            account_holdings::modified_by.eq(Some(modified_by)),
        ))
        .execute(&mut conn)
        .into_core()?;

        Ok(updated)
    }
}

