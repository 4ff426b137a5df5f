//! The search area of the transactions screen.

use moneta_controls::{Icon, button, field};
use moneta_core::{Environment, View, task};
use moneta_form::{Anything, Form};
use moneta_layout::hstack;
use moneta_text::text;
use serde::{Deserialize, Serialize};

use crate::context::TransactionsContext;

/// The values captured by the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free text matched against transactions. May be empty.
    pub query: String,
}

/// A text input plus submit button that reloads the transaction list.
///
/// Submitting hands the query to the context's fetch operation; while the
/// fetch is in flight the button is disabled, so a submission cannot overlap
/// itself. A failed fetch is not handled here. It travels up to whatever
/// error boundary the surrounding application installed.
///
/// Requires a [`TransactionsContext`] in the environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchForm;

impl View for SearchForm {
    fn body(self, env: Environment) -> impl View {
        let context = env
            .get::<TransactionsContext>()
            .expect("SearchForm needs a TransactionsContext installed above it")
            .clone();
        let fetch = context.fetch_transactions();

        let form = Form::<SearchQuery>::default();
        let query = form
            .values()
            .project(|values| values.query.clone(), |values, query| values.query = query);

        // The slice subscription lives in the closure; reading at submit
        // time picks up an operation swapped in after render.
        let submit = {
            let form = form.clone();
            move |env: &Environment| {
                let form = form.clone();
                let fetch = fetch.get();
                task::spawn_fallible(env, async move {
                    form.submit(&Anything, |values: SearchQuery| fetch.call(values.query))
                        .await
                });
            }
        };

        hstack((
            field(text("Search"), &query).prompt("Search for transactions"),
            button(text("Search"))
                .icon(Icon::MagnifyingGlass)
                .disabled(form.is_submitting())
                .action(submit),
        ))
    }
}
