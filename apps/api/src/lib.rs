pub mod config;
pub mod db;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod refinement;
pub mod routes;
pub mod state;
pub mod storage;

#[cfg(test)]
mod testing;
