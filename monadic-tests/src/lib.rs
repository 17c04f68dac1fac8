pub mod laws;
pub mod strings;
pub mod validate;
