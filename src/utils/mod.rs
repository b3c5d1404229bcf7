pub mod database;
pub mod id;
pub mod response;
pub mod validation;
