//! Database models for accounts and holdings.

use std::str::FromStr;

use diesel::prelude::*;
use rust_decimal::Decimal;

use dashboard_core::accounts::{Account, AccountHolding, Asset, User};

use crate::errors::StorageError;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserDB {
    pub id: i32,
    pub login: String,
    pub user_name: String,
    pub client_id: i32,
    pub location_id: i32,
}

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: i32,
    pub isin: String,
    pub name: String,
}

#[derive(
    Queryable, Identifiable, Insertable, Selectable, Associations, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
pub struct AccountDB {
    pub id: i32,
    pub user_id: i32,
    pub account_reference: String,
    pub name: String,
    pub client_type: String,
}

#[derive(
    Queryable, Identifiable, Insertable, Selectable, Associations, PartialEq, Debug, Clone,
)]
#[diesel(table_name = crate::schema::account_holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(belongs_to(AccountDB, foreign_key = account_id))]
#[diesel(belongs_to(AssetDB, foreign_key = asset_id))]
pub struct AccountHoldingDB {
    pub id: i32,
    pub account_id: i32,
    pub asset_id: i32,
    pub units: String,
    pub exclude_from_rebalance: String,
    pub modified_by: Option<String>,
}

impl From<UserDB> for User {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            login: db.login,
            user_name: db.user_name,
            client_id: db.client_id,
            location_id: db.location_id,
        }
    }
}

impl From<AssetDB> for Asset {
    fn from(db: AssetDB) -> Self {
        Self {
            id: db.id,
            isin: db.isin,
            name: db.name,
        }
    }
}

impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            account_reference: db.account_reference,
            name: db.name,
            client_type: db.client_type,
        }
    }
}

impl TryFrom<AccountHoldingDB> for AccountHolding {
    type Error = StorageError;

    fn try_from(db: AccountHoldingDB) -> Result<Self, Self::Error> {
        let units = Decimal::from_str(&db.units).map_err(|e| {
            StorageError::DecodeFailed(format!(
                "Invalid units '{}' on account holding {}: {}",
                db.units, db.id, e
            ))
        })?;

        Ok(Self {
            id: db.id,
            account_id: db.account_id,
            asset_id: db.asset_id,
            units,
            exclude_from_rebalance: db.exclude_from_rebalance,
            modified_by: db.modified_by,
        })
    }
}
