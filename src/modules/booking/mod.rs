pub mod repository;
pub mod routes;
pub mod token;
pub mod validation;
