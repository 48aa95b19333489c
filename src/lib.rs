// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod round;
pub mod runtime;
pub mod session;
pub mod word_list;
pub mod word_queue;
