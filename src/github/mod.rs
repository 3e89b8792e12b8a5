mod client;
mod contents;
mod event;
mod repository;
mod schema;
mod user;

pub use client::{Client, PageProgress, DEFAULT_API_URL};
