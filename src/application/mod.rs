// Application layer - Page composition use cases
pub mod case_study_service;
pub mod chart_renderer;
pub mod stylesheet;
