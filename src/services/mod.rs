pub mod augment;
pub mod records;
pub mod storage;
