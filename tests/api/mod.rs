mod mutations;
mod reads;

use arrival::api::ApiError;
use arrival_test_utils::prelude::*;

use crate::util::api;
