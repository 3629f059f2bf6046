pub mod config;
pub mod docs;
pub mod error;
pub mod response;

pub mod database;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;
