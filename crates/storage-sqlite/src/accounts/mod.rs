//! SQLite storage for users, accounts, assets and account holdings.

mod model;
mod repository;


pub use model::{AccountDB, AccountHoldingDB, AssetDB, UserDB};
pub use repository::AccountsRepository;
