pub mod context;
pub mod error;
pub mod guard;
pub mod session;
pub mod storage;
