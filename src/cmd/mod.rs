pub mod compare;
pub mod explain;
