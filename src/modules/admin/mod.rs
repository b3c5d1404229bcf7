pub mod repository;
pub mod routes;
