pub mod builder;
pub mod lenient;
pub mod resume;
