use crate::key_bindings::cancel_binding::CancelBinding;
use hotkey_domain::order::template::OrderTemplate;
use serde::{Deserialize, Serialize};

/// Pressing the bound chord submits an order built from `template`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskBinding {
    pub name: String,
    pub template: Box<dyn OrderTemplate>,
}

impl TaskBinding {
    pub fn new(name: impl Into<String>, template: Box<dyn OrderTemplate>) -> Self {
        Self {
            name: name.into(),
            template,
        }
    }
}

/// What a key press resolves to
#[derive(Debug, Clone)]
pub enum KeyAction {
    Task(TaskBinding),
    Cancel(CancelBinding),
}
