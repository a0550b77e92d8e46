mod client;
mod collections;

pub use client::{ApiClient, ApiError};
pub use collections::{Collection, CollectionList};
