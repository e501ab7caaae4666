//! Accounts module - users, accounts, assets and account holdings.

mod accounts_constants;
mod accounts_model;


pub use accounts_constants::*;
pub use accounts_model::{
    Account, AccountHolding, AccountWithHoldings, Asset, HoldingWithAsset, User,
};
