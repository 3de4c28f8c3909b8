pub mod error;
pub mod history;
pub mod preprocess;
pub mod recognition;
pub mod search;
pub mod selection;
