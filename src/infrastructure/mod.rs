// Infrastructure layer - External dependencies and adapters
pub mod chunked_html;
pub mod config;
pub mod error;
pub mod html_response;
pub mod site_writer;
pub mod svg_charts;
