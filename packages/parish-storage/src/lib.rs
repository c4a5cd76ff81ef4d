pub mod churches;
pub mod db;
pub mod family_groups;
pub mod members;
pub mod models;
pub mod offerings;
pub mod schema;

mod error;

pub use error::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
