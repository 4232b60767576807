pub mod conversion_service;
pub mod theme_service;
