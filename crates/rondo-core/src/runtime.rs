//! Re-exports of the async runtime parts shared by the crates.

pub use tokio::spawn;
pub use tokio::sync::mpsc;
