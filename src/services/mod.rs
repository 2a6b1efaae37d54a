pub mod export_service;
pub mod generation;
pub mod itinerary_service;
pub mod prompt_service;
pub mod template_service;
pub mod validation_service;
