use jobboard_test_utils::prelude::*;
