//! # postman-collection
//!
//! Postman Collection v2.1 model and the conversion of OpenAPI documents into
//! collections grouped by tag.

mod builder;
mod collection;
mod error;
mod example;

pub use builder::{CollectionBuilder, DEFAULT_FOLDER};
pub use collection::*;
pub use error::{BuildError, BuildResult};
pub use example::ExampleGenerator;
