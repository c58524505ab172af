pub mod console;
pub mod runtime;
pub mod scheduler;
pub mod store;
