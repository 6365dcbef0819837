//! Search Input Handling
//!
//! Keystrokes update the query at once but only filter after the debounce
//! window closes. Cuisine changes filter immediately.

use leptos::prelude::*;
use leptos_debounce::{Debouncer, TimerBackend};

use crate::store::{store_apply_query, BrowserStateStoreFields, BrowserStore};

/// Where query edits and filter passes go
pub trait QuerySink: Clone + 'static {
    fn set_search(&self, text: String);
    fn set_cuisine(&self, cuisine: String);
    fn run_filter(&self);
}

impl QuerySink for BrowserStore {
    fn set_search(&self, text: String) {
        self.query().write().search = text;
    }

    fn set_cuisine(&self, cuisine: String) {
        self.query().write().cuisine = cuisine;
    }

    fn run_filter(&self) {
        store_apply_query(self);
    }
}

/// Record the new search text and (re)schedule the filter pass.
pub fn on_search_input<B: TimerBackend, S: QuerySink>(debouncer: &Debouncer<B>, sink: &S, text: String) {
    sink.set_search(text);
    let sink = sink.clone();
    debouncer.call(move || sink.run_filter());
}

/// Apply a cuisine selection now. Any pending search pass is dropped; this one
/// already reads the latest search text.
pub fn on_cuisine_change<B: TimerBackend, S: QuerySink>(debouncer: &Debouncer<B>, sink: &S, cuisine: String) {
    debouncer.cancel();
    sink.set_cuisine(cuisine);
    sink.run_filter();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use leptos_debounce::ManualTimers;

    use crate::catalog::tests::make_recipe;
    use crate::config::BrowserConfig;
    use crate::store::BrowserState;

    const CONFIG: BrowserConfig = BrowserConfig::DEFAULT;

    /// In-memory state that records every filter pass
    #[derive(Clone)]
    struct RecordingSink {
        state: Rc<RefCell<BrowserState>>,
        passes: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingSink {
        fn loaded() -> Self {
            let mut chicken = make_recipe(1, "Chicken Curry", "Indian");
            chicken.tags.push("Chicken".into());
            let mut chickpea = make_recipe(2, "Chickpea Salad", "Greek");
            chickpea.ingredients.push("Chickpeas".into());
            let pasta = make_recipe(3, "Pasta", "Italian");

            let mut state = BrowserState::new(&CONFIG);
            let ticket = state.begin_load();
            state.finish_load(ticket, Ok(vec![chicken, chickpea, pasta]), &CONFIG);

            Self {
                state: Rc::new(RefCell::new(state)),
                passes: Rc::default(),
            }
        }

        fn filtered_ids(&self) -> Vec<u32> {
            self.state.borrow().catalog.filtered().iter().map(|r| r.id).collect()
        }
    }

    impl QuerySink for RecordingSink {
        fn set_search(&self, text: String) {
            self.state.borrow_mut().query.search = text;
        }

        fn set_cuisine(&self, cuisine: String) {
            self.state.borrow_mut().query.cuisine = cuisine;
        }

        fn run_filter(&self) {
            let mut state = self.state.borrow_mut();
            let query = state.query.clone();
            state.catalog.apply_query(&query);
            self.passes.borrow_mut().push(query.search);
        }
    }

    #[test]
    fn test_quick_typing_runs_one_pass_with_last_text() {
        let timers = ManualTimers::new();
        let debouncer = Debouncer::with_backend(timers.clone(), CONFIG.search_debounce_ms);
        let sink = RecordingSink::loaded();

        on_search_input(&debouncer, &sink, "chick".into());
        timers.advance(150);
        on_search_input(&debouncer, &sink, "chicken".into());
        timers.advance(299);
        assert!(sink.passes.borrow().is_empty());

        timers.advance(1);
        assert_eq!(*sink.passes.borrow(), vec!["chicken".to_string()]);
        assert_eq!(sink.filtered_ids(), vec![1]);

        timers.advance(1_000);
        assert_eq!(sink.passes.borrow().len(), 1);
    }

    #[test]
    fn test_pauses_between_keystrokes_run_each_pass() {
        let timers = ManualTimers::new();
        let debouncer = Debouncer::with_backend(timers.clone(), CONFIG.search_debounce_ms);
        let sink = RecordingSink::loaded();

        on_search_input(&debouncer, &sink, "chick".into());
        timers.advance(300);
        assert_eq!(sink.filtered_ids(), vec![1, 2]);

        on_search_input(&debouncer, &sink, "chicken".into());
        timers.advance(300);
        assert_eq!(*sink.passes.borrow(), vec!["chick".to_string(), "chicken".to_string()]);
    }

    #[test]
    fn test_cuisine_applies_immediately_with_pending_text() {
        let timers = ManualTimers::new();
        let debouncer = Debouncer::with_backend(timers.clone(), CONFIG.search_debounce_ms);
        let sink = RecordingSink::loaded();

        on_search_input(&debouncer, &sink, "chick".into());
        on_cuisine_change(&debouncer, &sink, "Greek".into());

        assert_eq!(sink.filtered_ids(), vec![2]);
        assert!(!debouncer.is_pending());

        timers.advance(1_000);
        assert_eq!(sink.passes.borrow().len(), 1);
    }

    #[test]
    fn test_clearing_cuisine_restores_all() {
        let timers = ManualTimers::new();
        let debouncer = Debouncer::with_backend(timers, CONFIG.search_debounce_ms);
        let sink = RecordingSink::loaded();

        on_cuisine_change(&debouncer, &sink, "Italian".into());
        assert_eq!(sink.filtered_ids(), vec![3]);

        on_cuisine_change(&debouncer, &sink, String::new());
        assert_eq!(sink.filtered_ids(), vec![1, 2, 3]);
    }
}
