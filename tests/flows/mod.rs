//! End-to-end page flows: state transitions driving the client against a mock backend.
//!
//! Each test runs the fetches and mutations a transition returns the same way the views
//! dispatch them, feeding results back until nothing is left to do.

mod admin;
mod messaging;
mod student;

use arrival_test_utils::prelude::*;

use crate::util::api;
