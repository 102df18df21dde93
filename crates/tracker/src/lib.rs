pub mod codes;
pub mod config;
pub mod error;
pub mod forms;
pub mod session;
pub mod store;

pub use codes::CodeRepository;
pub use config::TrackerConfig;
pub use error::{Result, TrackerError};
pub use forms::{ProfileForm, SelfCheckForm};
pub use session::{HistoryEntry, Session};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
