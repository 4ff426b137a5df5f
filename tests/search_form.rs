//! End-to-end behavior of the transactions search form.
//!
//! The form renders headlessly: hooks installed in the environment capture
//! the stack, text field and button configurations the way a backend would,
//! and a local executor stands in for the application's event loop.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::LocalPool;
use moneta::controls::{ButtonConfig, Icon, TextFieldConfig};
use moneta::layout::StackConfig;
use moneta::prelude::*;
use moneta::{FetchError, FetchTransactions, SearchForm, TransactionsContext};

type FetchOutcome = Result<(), FetchError>;

struct Harness {
    pool: LocalPool,
    env: Environment,
    fields: Rc<RefCell<Vec<TextFieldConfig>>>,
    buttons: Rc<RefCell<Vec<ButtonConfig>>>,
    errors: Rc<RefCell<Vec<String>>>,
}

impl Harness {
    fn new(fetch: FetchTransactions) -> Self {
        let pool = LocalPool::new();
        let fields = Rc::new(RefCell::new(Vec::new()));
        let buttons = Rc::new(RefCell::new(Vec::new()));
        let errors = Rc::new(RefCell::new(Vec::new()));

        let env = Environment::new()
            .with(task::Spawner::new(pool.spawner()))
            .with(ErrorBoundary::new({
                let errors = errors.clone();
                move |_, error| errors.borrow_mut().push(error.to_string())
            }))
            .with(TransactionsContext::new(fetch))
            .with(Hook::<StackConfig>::new(|env, config| {
                for child in config.contents {
                    render(child, env);
                }
                AnyView::default()
            }))
            .with(Hook::<TextFieldConfig>::new({
                let fields = fields.clone();
                move |_, config| {
                    fields.borrow_mut().push(config);
                    AnyView::default()
                }
            }))
            .with(Hook::<ButtonConfig>::new({
                let buttons = buttons.clone();
                move |_, config| {
                    buttons.borrow_mut().push(config);
                    AnyView::default()
                }
            }));

        render(SearchForm, &env);

        Self {
            pool,
            env,
            fields,
            buttons,
            errors,
        }
    }

    fn type_query(&self, query: &str) {
        self.fields.borrow()[0].value.set(query.to_string());
    }

    fn submit_disabled(&self) -> bool {
        self.buttons.borrow()[0].disabled.get()
    }

    /// Activates the submit button, unless it is disabled.
    fn click_submit(&mut self) {
        if self.submit_disabled() {
            return;
        }
        self.buttons.borrow_mut()[0].action.handle(&self.env);
        self.pool.run_until_stalled();
    }

    fn settle(&mut self) {
        self.pool.run_until_stalled();
    }
}

/// A fetch that records its queries and completes only when released.
fn controlled_fetch() -> (
    FetchTransactions,
    Rc<RefCell<Vec<String>>>,
    Rc<RefCell<Vec<oneshot::Sender<FetchOutcome>>>>,
) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let gates = Rc::new(RefCell::new(Vec::new()));
    let fetch = FetchTransactions::new({
        let calls = calls.clone();
        let gates = gates.clone();
        move |query| {
            calls.borrow_mut().push(query);
            let (release, gate) = oneshot::channel();
            gates.borrow_mut().push(release);
            async move { gate.await.unwrap_or(Ok(())) }
        }
    });
    (fetch, calls, gates)
}

#[test]
fn renders_the_documented_field_and_button() {
    let (fetch, _, _) = controlled_fetch();
    let harness = Harness::new(fetch);

    let fields = harness.fields.borrow();
    let buttons = harness.buttons.borrow();
    assert_eq!(fields.len(), 1);
    assert_eq!(buttons.len(), 1);
    assert_eq!(fields[0].prompt.get(), "Search for transactions");
    assert_eq!(buttons[0].icon, Some(Icon::MagnifyingGlass));
    assert!(!buttons[0].disabled.get());
}

#[test]
fn submits_the_typed_query_and_disables_while_pending() {
    let (fetch, calls, gates) = controlled_fetch();
    let mut harness = Harness::new(fetch);

    harness.type_query("groceries");
    harness.click_submit();

    assert_eq!(*calls.borrow(), ["groceries"]);
    assert!(harness.submit_disabled(), "button stays disabled in flight");

    gates.borrow_mut().remove(0).send(Ok(())).unwrap();
    harness.settle();

    assert!(!harness.submit_disabled());
    assert!(harness.errors.borrow().is_empty());
}

#[test]
fn an_empty_query_is_a_valid_submission() {
    let (fetch, calls, gates) = controlled_fetch();
    let mut harness = Harness::new(fetch);

    harness.click_submit();
    assert_eq!(*calls.borrow(), [String::new()]);

    gates.borrow_mut().remove(0).send(Ok(())).unwrap();
    harness.settle();
    assert!(harness.errors.borrow().is_empty());
}

#[test]
fn clicks_during_a_pending_fetch_do_not_stack() {
    let (fetch, calls, gates) = controlled_fetch();
    let mut harness = Harness::new(fetch);

    harness.type_query("rent");
    harness.click_submit();
    harness.click_submit();
    harness.click_submit();

    assert_eq!(calls.borrow().len(), 1);

    gates.borrow_mut().remove(0).send(Ok(())).unwrap();
    harness.settle();

    harness.click_submit();
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn fetch_failures_propagate_to_the_error_boundary() {
    let (fetch, _, gates) = controlled_fetch();
    let mut harness = Harness::new(fetch);

    harness.click_submit();
    gates
        .borrow_mut()
        .remove(0)
        .send(Err(FetchError(String::from("server unreachable"))))
        .unwrap();
    harness.settle();

    let errors = harness.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("server unreachable"), "got: {}", errors[0]);
    drop(errors);

    // a failed submission settles the form again
    assert!(!harness.submit_disabled());
}

#[test]
fn submissions_use_the_currently_installed_fetch_operation() {
    let (stale, stale_calls, _stale_gates) = controlled_fetch();
    let mut harness = Harness::new(stale);

    // The application swaps in a new operation after the form rendered.
    let (fresh, fresh_calls, fresh_gates) = controlled_fetch();
    harness
        .env
        .get::<TransactionsContext>()
        .unwrap()
        .store()
        .update(|state| state.fetch = fresh);

    harness.type_query("utilities");
    harness.click_submit();

    assert!(stale_calls.borrow().is_empty(), "render-time fetch must not be called");
    assert_eq!(*fresh_calls.borrow(), ["utilities"]);

    fresh_gates.borrow_mut().remove(0).send(Ok(())).unwrap();
    harness.settle();
    assert!(harness.errors.borrow().is_empty());
}

#[test]
fn typing_flows_into_the_submitted_values() {
    let (fetch, calls, gates) = controlled_fetch();
    let mut harness = Harness::new(fetch);

    harness.type_query("coffee");
    harness.type_query("coffee beans");
    harness.click_submit();
    assert_eq!(*calls.borrow(), ["coffee beans"]);

    gates.borrow_mut().remove(0).send(Ok(())).unwrap();
    harness.settle();
}
