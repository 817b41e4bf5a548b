use approval_hierarchy::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock UserInteraction answering every question the same way
#[derive(Clone)]
pub struct MockUserInteraction {
    pub answer: bool,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub alerts: Arc<Mutex<Vec<String>>>,
}

impl MockUserInteraction {
    pub fn confirming() -> Self {
        Self::answering(true)
    }

    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Arc::new(Mutex::new(Vec::new())),
            alerts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn get_alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl UserInteraction for MockUserInteraction {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
