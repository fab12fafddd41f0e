pub mod storage;
pub mod waitlist;

pub use storage::{FileStorage, InMemoryStorage, WaitlistStorage};
pub use waitlist::{StoreError, WaitlistStore};
