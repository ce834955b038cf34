//! Resource-scoped façades over the generic [`ObjectApi`](crate::api::resource::ObjectApi).

pub mod storage;

pub use storage::StorageOperator;
