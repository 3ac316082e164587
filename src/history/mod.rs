mod storage;
mod types;

pub use storage::ChatLog;
pub use types::Entry;
