//! Generic read access to any entity table through the entities handle.

use std::marker::PhantomData;
use std::sync::Arc;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use dashboard_core::accounts::{Account, AccountHolding, Asset, User};
use dashboard_core::errors::DatabaseError;
use dashboard_core::{BusinessEntity, Error, Result};

use crate::accounts::{AccountDB, AccountHoldingDB, AssetDB, UserDB};
use crate::entities::DashboardEntities;
use crate::errors::IntoCore;
use crate::schema::{account_holdings, accounts, assets, users};

/// A business entity backed by one table of the dashboard database.
pub trait EntityTable: BusinessEntity + Sized {
    fn load_all(conn: &mut SqliteConnection) -> Result<Vec<Self>>;

    fn load_by_id(conn: &mut SqliteConnection, id: i32) -> Result<Option<Self>>;
}

/// Repository over one entity type, sharing the fixture's entities handle.
pub struct DashboardRepositoryBase<T: EntityTable> {
    entities: Arc<DashboardEntities>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: EntityTable> DashboardRepositoryBase<T> {
    pub fn new(entities: Arc<DashboardEntities>) -> Self {
        Self {
            entities,
            _entity: PhantomData,
        }
    }

    pub fn entities(&self) -> &Arc<DashboardEntities> {
        &self.entities
    }

    pub fn get_all(&self) -> Result<Vec<T>> {
        let mut conn = self.entities.connection()?;
        T::load_all(&mut conn)
    }

    /// Loads one entity, failing with `NotFound` when the id is unknown.
    pub fn get_by_id(&self, id: i32) -> Result<T> {
        let mut conn = self.entities.connection()?;
        T::load_by_id(&mut conn, id)?.ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!(
                "{} with id {}",
                T::ENTITY_NAME,
                id
            )))
        })
    }

    /// Loads every entity matching `predicate`, in id order.
    pub fn find<P>(&self, predicate: P) -> Result<Vec<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.get_all()?.into_iter().filter(|e| predicate(e)).collect())
    }
}

impl EntityTable for User {
    fn load_all(conn: &mut SqliteConnection) -> Result<Vec<Self>> {
        let rows = users::table
            .select(UserDB::as_select())
            .order(users::id.asc())
            .load::<UserDB>(conn)
            .into_core()?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    fn load_by_id(conn: &mut SqliteConnection, id: i32) -> Result<Option<Self>> {
        let row = users::table
            .find(id)
            .select(UserDB::as_select())
            .first::<UserDB>(conn)
            .optional()
            .into_core()?;
        Ok(row.map(User::from))
    }
}

impl EntityTable for Account {
    fn load_all(conn: &mut SqliteConnection) -> Result<Vec<Self>> {
        let rows = accounts::table
            .select(AccountDB::as_select())
            .order(accounts::id.asc())
            .load::<AccountDB>(conn)
            .into_core()?;
        Ok(rows.into_iter().map(Account::from).collect())
    }

    fn load_by_id(conn: &mut SqliteConnection, id: i32) -> Result<Option<Self>> {
        let row = accounts::table
            .find(id)
            .select(AccountDB::as_select())
            .first::<AccountDB>(conn)
            .optional()
            .into_core()?;
        Ok(row.map(Account::from))
    }
}

impl EntityTable for Asset {
    fn load_all(conn: &mut SqliteConnection) -> Result<Vec<Self>> {
        let rows = assets::table
            .select(AssetDB::as_select())
            .order(assets::id.asc())
            .load::<AssetDB>(conn)
            .into_core()?;
        Ok(rows.into_iter().map(Asset::from).collect())
    }

    fn load_by_id(conn: &mut SqliteConnection, id: i32) -> Result<Option<Self>> {
        let row = assets::table
            .find(id)
            .select(AssetDB::as_select())
            .first::<AssetDB>(conn)
            .optional()
            .into_core()?;
        Ok(row.map(Asset::from))
    }
}

impl EntityTable for AccountHolding {
    fn load_all(conn: &mut SqliteConnection) -> Result<Vec<Self>> {
        let rows = account_holdings::table
            .select(AccountHoldingDB::as_select())
            .order(account_holdings::id.asc())
            .load::<AccountHoldingDB>(conn)
            .into_core()?;
        rows.into_iter()
            .map(|row| AccountHolding::try_from(row).map_err(Error::from))
            .collect()
    }

    fn load_by_id(conn: &mut SqliteConnection, id: i32) -> Result<Option<Self>> {
        let row = account_holdings::table
            .find(id)
            .select(AccountHoldingDB::as_select())
            .first::<AccountHoldingDB>(conn)
            .optional()
            .into_core()?;
        row.map(|r| AccountHolding::try_from(r).map_err(Error::from))
            .transpose()
    }
}
