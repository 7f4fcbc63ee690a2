//! Pages - top-level compositions handed to [`mount`](crate::pipeline::mount).

mod home;

pub use home::*;
