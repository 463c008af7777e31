pub mod context;
pub mod date;
pub mod memory;
pub mod session;

pub use context::*;
pub use date::*;
pub use memory::*;
pub use session::*;
