pub mod catalog;
pub mod history;
