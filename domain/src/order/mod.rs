pub mod open_order;
pub mod snapshot;
pub mod template;
