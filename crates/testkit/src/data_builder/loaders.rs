use dashboard_core::accounts::{AccountWithHoldings, User};
use dashboard_core::Result;
use dashboard_storage_sqlite::AccountsRepository;

/// Produces candidate users, in preference order.
pub trait UserDataLoader {
    fn load_users(&self, repository: &AccountsRepository) -> Result<Vec<User>>;
}

/// Produces the accounts of a user that satisfy the loader's criteria.
pub trait AccountDataLoader {
    fn load_accounts(
        &self,
        repository: &AccountsRepository,
        user: &User,
    ) -> Result<Vec<AccountWithHoldings>>;
}

/// The user with an exact login.
#[derive(Debug, Clone)]
pub struct GetUserByLogin {
    login: String,
}

impl GetUserByLogin {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }
}

impl UserDataLoader for GetUserByLogin {
    fn load_users(&self, repository: &AccountsRepository) -> Result<Vec<User>> {
        repository.find_users_by_login(&self.login)
    }
}

/// Every user, in id order.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetAllUsers;

impl UserDataLoader for GetAllUsers {
    fn load_users(&self, repository: &AccountsRepository) -> Result<Vec<User>> {
        repository.list_users()
    }
}

type AccountPredicate = Box<dyn Fn(&AccountWithHoldings) -> bool>;

/// Accounts of a user, narrowed by client type and arbitrary predicates.
#[derive(Default)]
pub struct GetAccounts {
    direct_client_only: bool,
    predicates: Vec<AccountPredicate>,
}

impl GetAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps only accounts of direct (non-advised) clients.
    pub fn for_direct_client(mut self) -> Self {
        self.direct_client_only = true;
        self
    }

    /// Keeps only accounts matching `predicate`. Predicates accumulate.
    pub fn having<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&AccountWithHoldings) -> bool + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    fn matches(&self, account: &AccountWithHoldings) -> bool {
        (!self.direct_client_only || account.account.is_direct_client())
            && self.predicates.iter().all(|p| p(account))
    }
}

impl AccountDataLoader for GetAccounts {
    fn load_accounts(
        &self,
        repository: &AccountsRepository,
        user: &User,
    ) -> Result<Vec<AccountWithHoldings>> {
        Ok(repository
            .accounts_with_holdings(user.id)?
            .into_iter()
            .filter(|account| self.matches(account))
            .collect())
    }
}
