// Domain layer - Literal page content
pub mod case_study;
pub mod chart;
pub mod diagram;
pub mod images;
pub mod motion;
pub mod table;
