pub mod enhanced;
pub mod handlers;
pub mod scoring;
