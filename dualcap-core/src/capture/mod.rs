pub mod block;
pub mod coordinator;
