use std::collections::HashMap;

use crate::codec::record_model::SavedValue;
use crate::dom::dom_model::Document;

/// A custom restore strategy for one control name. Invoked once per stored
/// value, in list order, with the live document and the owning form's index.
pub type RestoreHandler = Box<dyn Fn(&mut Document, usize, &SavedValue)>;

/// Per-name restore callbacks. A name with a handler never takes the default
/// kind-based restore path.
#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<String, RestoreHandler>,
}

impl HandlerTable {
    pub fn new() -> Self {
        HandlerTable::default()
    }

    pub fn insert<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(&mut Document, usize, &SavedValue) + 'static,
    {
        self.handlers.insert(name.to_string(), Box::new(handler));
    }

    /// Builder-style variant of `insert`.
    pub fn on<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&mut Document, usize, &SavedValue) + 'static,
    {
        self.insert(name, handler);
        self
    }

    pub fn get(&self, name: &str) -> Option<&RestoreHandler> {
        self.handlers.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
