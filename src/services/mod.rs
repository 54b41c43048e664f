pub mod histogram;
pub mod pipeline;
pub mod scoring;
pub mod tables;
pub mod word_loader;
