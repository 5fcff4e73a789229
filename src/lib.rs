// Library exports for testing
pub mod busiest_hour;
pub mod error;
pub mod feed;
pub mod logging;
pub mod model;
pub mod renderer;
pub mod report;
pub mod snapshot;
pub mod timefmt;
pub mod tokenize;
pub mod word_rank;
