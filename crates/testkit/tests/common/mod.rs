#![allow(dead_code)]

use diesel::prelude::*;
use tempfile::TempDir;

use dashboard_storage_sqlite::accounts::{AccountDB, AccountHoldingDB, AssetDB, UserDB};
use dashboard_storage_sqlite::schema::{account_holdings, accounts, assets, users};
use dashboard_storage_sqlite::DashboardEntities;
use dashboard_testkit::{DashboardIntegrationTest, TestSettings, DASHBOARD_ENTITIES};

pub const TEST_LOGIN: &str = "100068966";
pub const TEST_ACCOUNT_REFERENCE: &str = "A10031907";
pub const TEST_ACCOUNT_ID: i32 = 3107;

/// Fixture pointed at `service_url` and a fresh database in a temp dir.
/// The temp dir must outlive the fixture.
pub fn fixture_with_temp_db(service_url: &str) -> (DashboardIntegrationTest, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("dashboard.db");
    let settings = TestSettings::new(service_url)
        .with_connection_string(DASHBOARD_ENTITIES, db_path.to_string_lossy());
    (DashboardIntegrationTest::with_settings(settings), temp_dir)
}

pub fn insert_user(entities: &DashboardEntities, id: i32, login: &str) {
    let mut conn = entities.connection().expect("Failed to get connection");
    diesel::insert_into(users::table)
        .values(&UserDB {
            id,
            login: login.to_string(),
            user_name: format!("Client {}", login),
            client_id: 1000 + id,
            location_id: 5,
        })
        .execute(&mut conn)
        .expect("Failed to insert user");
}

pub fn insert_account(
    entities: &DashboardEntities,
    id: i32,
    user_id: i32,
    reference: &str,
    client_type: &str,
) {
    let mut conn = entities.connection().expect("Failed to get connection");
    diesel::insert_into(accounts::table)
        .values(&AccountDB {
            id,
            user_id,
            account_reference: reference.to_string(),
            name: format!("Account {}", reference),
            client_type: client_type.to_string(),
        })
        .execute(&mut conn)
        .expect("Failed to insert account");
}

/// Inserts an asset and a holding of it in `account_id`.
pub fn insert_holding(
    entities: &DashboardEntities,
    id: i32,
    account_id: i32,
    isin: &str,
    exclude_from_rebalance: &str,
) {
    let mut conn = entities.connection().expect("Failed to get connection");
    diesel::insert_into(assets::table)
        .values(&AssetDB {
            id,
            isin: isin.to_string(),
            name: format!("Fund {}", isin),
        })
        .execute(&mut conn)
        .expect("Failed to insert asset");
    diesel::insert_into(account_holdings::table)
        .values(&AccountHoldingDB {
            id,
            account_id,
            asset_id: id,
            units: "100".to_string(),
            exclude_from_rebalance: exclude_from_rebalance.to_string(),
            modified_by: None,
        })
        .execute(&mut conn)
        .expect("Failed to insert holding");
}

/// The direct client, account and three holdings the exclusion scenario needs.
pub fn seed_exclusion_scenario(entities: &DashboardEntities) {
    insert_user(entities, 1, TEST_LOGIN);
    insert_account(entities, TEST_ACCOUNT_ID, 1, TEST_ACCOUNT_REFERENCE, "Direct");
    insert_holding(entities, 1, TEST_ACCOUNT_ID, "GB00B3X7QG63", "Yes");
    insert_holding(entities, 2, TEST_ACCOUNT_ID, "IE00B4L5Y983", "No");
    insert_holding(entities, 3, TEST_ACCOUNT_ID, "GB00BPN5P782", "");
}
