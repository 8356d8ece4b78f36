//! Test harness for the Arrival client and frontend server.
//!
//! Tests describe the backend they expect with a [`TestBuilder`], which starts a mockito server
//! standing in for the Arrival backend and registers JSON endpoints on it. Response bodies are
//! built from the [`fixtures::factory`] functions so each test only spells out the fields it
//! cares about.

pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestError, TestSetup};
}
