//! The frozen lexical model and its builder.

mod builder;
mod frozen;

pub use builder::ModelBuilder;
pub use frozen::Model;
