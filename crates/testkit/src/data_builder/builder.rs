use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use dashboard_core::accounts::{AccountWithHoldings, User};
use dashboard_core::Result;
use dashboard_storage_sqlite::{AccountsRepository, DashboardEntities};

use super::loaders::{AccountDataLoader, UserDataLoader};

/// A user and the accounts the builder's account loaders selected.
///
/// `user` is `None` when no candidate satisfied every loader.
#[derive(Debug, Clone, Default)]
pub struct UserTestData {
    pub user: Option<User>,
    pub accounts: Vec<AccountWithHoldings>,
}

pub struct UserTestDataBuilder<U: UserDataLoader> {
    user_loader: U,
    account_loaders: Vec<Box<dyn AccountDataLoader>>,
}

impl<U: UserDataLoader> UserTestDataBuilder<U> {
    pub fn new(user_loader: U) -> Self {
        Self {
            user_loader,
            account_loaders: Vec::new(),
        }
    }

    /// Requires the user to have at least one account selected by `loader`.
    pub fn with<L>(mut self, loader: L) -> Self
    where
        L: AccountDataLoader + 'static,
    {
        self.account_loaders.push(Box::new(loader));
        self
    }

    /// First candidate user for which every account loader selects an account.
    ///
    /// The returned accounts are the union of all loaders' selections, without
    /// duplicates, in loader order. Without account loaders the first
    /// candidate is returned with all of its accounts.
    pub fn get_first_valid(&self, entities: &Arc<DashboardEntities>) -> Result<UserTestData> {
        let repository = AccountsRepository::new(Arc::clone(entities));

        for user in self.user_loader.load_users(&repository)? {
            let Some(accounts) = self.select_accounts(&repository, &user)? else {
                debug!("User {} does not satisfy the account criteria", user.login);
                continue;
            };

            debug!(
                "Selected user {} with {} accounts",
                user.login,
                accounts.len()
            );
            return Ok(UserTestData {
                user: Some(user),
                accounts,
            });
        }

        Ok(UserTestData::default())
    }

    fn select_accounts(
        &self,
        repository: &AccountsRepository,
        user: &User,
    ) -> Result<Option<Vec<AccountWithHoldings>>> {
        if self.account_loaders.is_empty() {
            return repository.accounts_with_holdings(user.id).map(Some);
        }

        let mut seen = HashSet::new();
        let mut selected = Vec::new();
        for loader in &self.account_loaders {
            let accounts = loader.load_accounts(repository, user)?;
            if accounts.is_empty() {
                return Ok(None);
            }
            for account in accounts {
                if seen.insert(account.account.id) {
                    selected.push(account);
                }
            }
        }

        Ok(Some(selected))
    }
}
