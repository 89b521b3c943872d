pub mod files;
pub mod storage;

pub use files::{init_local_dir, resolve_data_dir};
pub use storage::{Storage, ALL_TASKS_KEY, TOTAL_COMPLETED_KEY};
