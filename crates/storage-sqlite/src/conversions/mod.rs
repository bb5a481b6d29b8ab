//! SQLite storage implementation for the conversion ledger.

mod model;
mod repository;

pub use model::ConversionDB;
pub use repository::ConversionRepository;
