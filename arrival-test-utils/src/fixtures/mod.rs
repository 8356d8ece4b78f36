//! Backend fixtures: JSON body factories and mock endpoint helpers.

pub mod factory;
pub mod mockito;

use crate::setup::TestSetup;

/// Endpoint helpers bound to a [`TestSetup`]'s mock server.
pub struct BackendFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> BackendFixtures<'a> {
    pub fn new(setup: &'a mut TestSetup) -> Self {
        Self { setup }
    }
}
