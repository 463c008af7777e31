pub mod context;
pub mod history;
pub mod stats;
pub mod update;
