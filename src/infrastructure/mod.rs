//! Infrastructure layer - Services, storage-backed repositories and
//! contract adapters

pub mod issue;
pub mod logging;
pub mod storage;
pub mod team;
pub mod user;
