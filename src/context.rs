//! Shared state for the transactions screen.

use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use moneta_reactive::{Computed, Store};
use thiserror::Error;

use crate::transaction::Transaction;

/// A failure while loading transactions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch transactions: {0}")]
pub struct FetchError(pub String);

/// The context-provided operation that loads the transactions matching a
/// query into the surrounding state.
///
/// Equality is by identity, so swapping in a new operation counts as a
/// change while unrelated writes to the state do not.
#[derive(Clone)]
pub struct FetchTransactions {
    run: Rc<dyn Fn(String) -> LocalBoxFuture<'static, Result<(), FetchError>>>,
}

impl FetchTransactions {
    /// Wraps a fetch operation.
    pub fn new<F, Fut>(run: F) -> Self
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = Result<(), FetchError>> + 'static,
    {
        Self {
            run: Rc::new(move |query| run(query).boxed_local()),
        }
    }

    /// Starts a fetch for the given query.
    pub fn call(&self, query: String) -> LocalBoxFuture<'static, Result<(), FetchError>> {
        (self.run)(query)
    }
}

impl Default for FetchTransactions {
    fn default() -> Self {
        Self::new(|_| async { Ok(()) })
    }
}

impl PartialEq for FetchTransactions {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.run, &other.run)
    }
}

moneta_core::impl_debug!(FetchTransactions);

/// Everything the transactions screen shares between its views.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransactionsState {
    /// The transactions currently on display.
    pub transactions: Vec<Transaction>,
    /// The operation views invoke to reload `transactions` for a query.
    pub fetch: FetchTransactions,
}

/// The environment entry giving views access to the transactions state.
///
/// Views subscribe to slices via the accessors here; a subscriber to one
/// slice is not notified when another slice changes.
#[derive(Debug, Clone)]
pub struct TransactionsContext {
    store: Store<TransactionsState>,
}

impl TransactionsContext {
    /// Creates a context whose reloads go through `fetch`.
    #[must_use]
    pub fn new(fetch: FetchTransactions) -> Self {
        Self {
            store: Store::new(TransactionsState {
                transactions: Vec::new(),
                fetch,
            }),
        }
    }

    /// Creates a context serving queries from an in-memory list.
    ///
    /// A query matches a transaction when it is a case-insensitive substring
    /// of the description or the category; the empty query matches all.
    #[must_use]
    pub fn with_source(source: Vec<Transaction>) -> Self {
        let context = Self::new(FetchTransactions::default());
        let store = context.store.clone();
        let fetch = FetchTransactions::new(move |query: String| {
            let store = store.clone();
            let source = source.clone();
            async move {
                let needle = query.to_lowercase();
                let matched: Vec<Transaction> = source
                    .into_iter()
                    .filter(|t| {
                        t.description.to_lowercase().contains(&needle)
                            || t.category.to_lowercase().contains(&needle)
                    })
                    .collect();
                tracing::debug!(query = %query, matched = matched.len(), "filtered transactions");
                store.update(|state| state.transactions = matched);
                Ok(())
            }
        });
        context.store.update(|state| state.fetch = fetch);
        context
    }

    /// The fetch operation, as a slice views can subscribe to.
    #[must_use]
    pub fn fetch_transactions(&self) -> Computed<FetchTransactions> {
        self.store.select(|state| state.fetch.clone())
    }

    /// The transactions on display, as a slice views can subscribe to.
    #[must_use]
    pub fn transactions(&self) -> Computed<Vec<Transaction>> {
        self.store.select(|state| state.transactions.clone())
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &Store<TransactionsState> {
        &self.store
    }
}
