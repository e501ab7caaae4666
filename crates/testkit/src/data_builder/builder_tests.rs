use std::sync::Arc;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tempfile::TempDir;

use dashboard_core::context::DomainRequestContext;
use dashboard_storage_sqlite::accounts::{AccountDB, AccountHoldingDB, AssetDB, UserDB};
use dashboard_storage_sqlite::schema::{account_holdings, accounts, assets, users};
use dashboard_storage_sqlite::DashboardEntities;

use super::{GetAccounts, GetAllUsers, GetUserByLogin, UserTestData, UserTestDataBuilder};
use crate::doubles::StubRequestContextProvider;

fn open_entities() -> (Arc<DashboardEntities>, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("builder.db");
    let context = dashboard_core::RequestContext {
        user_id: 9,
        user_name: "DFMFirmSuperuser".to_string(),
        ..Default::default()
    };
    let entities = DashboardEntities::open(
        &db_path.to_string_lossy(),
        Arc::new(StubRequestContextProvider::new(&context)),
    )
    .expect("Failed to open entities");
    assert_eq!(entities.request_context(), DomainRequestContext::from(&context));
    (Arc::new(entities), temp_dir)
}

fn add_user(conn: &mut SqliteConnection, id: i32, login: &str) {
    diesel::insert_into(users::table)
        .values(&UserDB {
            id,
            login: login.to_string(),
            user_name: login.to_string(),
            client_id: id,
            location_id: 5,
        })
        .execute(conn)
        .unwrap();
}

fn add_account(
    conn: &mut SqliteConnection,
    id: i32,
    user_id: i32,
    reference: &str,
    client_type: &str,
) {
    diesel::insert_into(accounts::table)
        .values(&AccountDB {
            id,
            user_id,
            account_reference: reference.to_string(),
            name: reference.to_string(),
            client_type: client_type.to_string(),
        })
        .execute(conn)
        .unwrap();
}

fn add_holding(conn: &mut SqliteConnection, id: i32, account_id: i32) {
    diesel::insert_into(assets::table)
        .values(&AssetDB {
            id,
            isin: format!("GB000000000{}", id),
            name: format!("Fund {}", id),
        })
        .execute(conn)
        .unwrap();
    diesel::insert_into(account_holdings::table)
        .values(&AccountHoldingDB {
            id,
            account_id,
            asset_id: id,
            units: "10".to_string(),
            exclude_from_rebalance: "No".to_string(),
            modified_by: None,
        })
        .execute(conn)
        .unwrap();
}

/// alpha: direct A-10 and advised A-11; beta: direct B-20.
fn seed(entities: &DashboardEntities) {
    let mut conn = entities.connection().unwrap();
    add_user(&mut conn, 1, "alpha");
    add_user(&mut conn, 2, "beta");
    add_account(&mut conn, 10, 1, "A-10", "Direct");
    add_account(&mut conn, 11, 1, "A-11", "Advised");
    add_account(&mut conn, 20, 2, "B-20", "Direct");
    add_holding(&mut conn, 1, 10);
    add_holding(&mut conn, 2, 11);
    add_holding(&mut conn, 3, 20);
}

fn account_ids(data: &UserTestData) -> Vec<i32> {
    data.accounts.iter().map(|a| a.account.id).collect()
}

#[test]
fn test_accounts_from_several_loaders_are_merged_without_duplicates() {
    let (entities, _temp_dir) = open_entities();
    seed(&entities);

    let data = UserTestDataBuilder::new(GetUserByLogin::new("alpha"))
        .with(GetAccounts::new().for_direct_client())
        .with(GetAccounts::new().having(|a| a.has_holdings()))
        .get_first_valid(&entities)
        .unwrap();

    assert_eq!(data.user.clone().map(|u| u.login), Some("alpha".to_string()));
    assert_eq!(account_ids(&data), vec![10, 11]);
}

#[test]
fn test_without_account_loaders_all_accounts_are_returned() {
    let (entities, _temp_dir) = open_entities();
    seed(&entities);

    let data = UserTestDataBuilder::new(GetUserByLogin::new("alpha"))
        .get_first_valid(&entities)
        .unwrap();

    assert_eq!(data.user.clone().map(|u| u.id), Some(1));
    assert_eq!(account_ids(&data), vec![10, 11]);
    assert!(data.accounts.iter().all(|a| a.holdings.len() == 1));
}

#[test]
fn test_users_failing_account_criteria_are_skipped() {
    let (entities, _temp_dir) = open_entities();
    seed(&entities);

    let data = UserTestDataBuilder::new(GetAllUsers)
        .with(GetAccounts::new().having(|a| a.account.account_reference == "B-20"))
        .get_first_valid(&entities)
        .unwrap();

    assert_eq!(data.user.clone().map(|u| u.login), Some("beta".to_string()));
    assert_eq!(account_ids(&data), vec![20]);
}

#[test]
fn test_no_matching_user_yields_empty_data() {
    let (entities, _temp_dir) = open_entities();
    seed(&entities);

    let data = UserTestDataBuilder::new(GetAllUsers)
        .with(
            GetAccounts::new()
                .for_direct_client()
                .having(|a| a.account.account_reference == "A-11"),
        )
        .get_first_valid(&entities)
        .unwrap();

    assert!(data.user.is_none());
    assert!(data.accounts.is_empty());
}
