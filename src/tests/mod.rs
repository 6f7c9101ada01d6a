mod service_tests;
mod store_tests;

pub mod support;
