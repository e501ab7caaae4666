//! Locates users and accounts in the dashboard database that satisfy a
//! test's preconditions.
//!
//! ```ignore
//! let accounts = GetAccounts::new()
//!     .for_direct_client()
//!     .having(|a| a.account.account_reference == "A10031907");
//! let data = UserTestDataBuilder::new(GetUserByLogin::new("100068966"))
//!     .with(accounts)
//!     .get_first_valid(&entities)?;
//! ```

mod builder;
mod loaders;

#[cfg(test)]
mod builder_tests;

pub use builder::{UserTestData, UserTestDataBuilder};
pub use loaders::{AccountDataLoader, GetAccounts, GetAllUsers, GetUserByLogin, UserDataLoader};
