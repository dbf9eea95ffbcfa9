//! Application services shared by use cases.

pub mod response_builder;

pub use response_builder::build_response;
