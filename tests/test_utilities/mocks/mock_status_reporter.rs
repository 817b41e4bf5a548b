use approval_hierarchy::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock StatusReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockStatusReporter {
    pub messages: Arc<Mutex<Vec<String>>>,
    pub open_activities: Arc<Mutex<i32>>,
}

impl MockStatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter(|m| m.starts_with("Warning: "))
            .collect()
    }

    pub fn open_activities(&self) -> i32 {
        *self.open_activities.lock().unwrap()
    }
}

impl StatusReporter for MockStatusReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_warning(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Warning: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }

    fn begin_activity(&self, _message: &str) {
        *self.open_activities.lock().unwrap() += 1;
    }

    fn end_activity(&self) {
        *self.open_activities.lock().unwrap() -= 1;
    }
}
