//! Conversions module - domain models, services, and traits.

mod conversions_model;
mod conversions_service;
mod conversions_traits;

mod conversions_model_tests;

// Re-export the public interface
pub use conversions_model::{
    round_half_up, Conversion, ConversionRequest, HistoryFilter, Page, PageRequest, SortOrder,
};
pub use conversions_service::ConversionService;
pub use conversions_traits::{ConversionRepositoryTrait, ConversionServiceTrait};
