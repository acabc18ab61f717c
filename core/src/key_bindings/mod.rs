pub mod binding_table;
pub mod cancel_binding;
pub mod cancel_selector;
pub mod profile;
pub mod task_binding;
