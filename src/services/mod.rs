pub mod completion_service;
pub mod image_service;
pub mod merge_service;
pub mod pricing_service;
pub mod travel_search_service;
