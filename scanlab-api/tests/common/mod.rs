//! Common test utilities for scanlab-api

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use scanlab_api::domain::{ApiFinding, RuleEngine, SpecDocument};

/// Rule engine that records how often it ran and reports nothing
#[derive(Default)]
pub struct SpyRuleEngine {
    pub calls: Arc<AtomicUsize>,
}

impl SpyRuleEngine {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RuleEngine for SpyRuleEngine {
    fn run_rules(&self, _doc: &SpecDocument) -> Vec<ApiFinding> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Vec::new()
    }
}
