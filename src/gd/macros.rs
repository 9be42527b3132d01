// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

// debug logging
macro_rules! gd_debug {
    ($msg:expr, $($var:ident = $value:expr),*) => {
        debug!(target: "gooddata", "{}", format!($msg, $($var = $value),*))
    };
    ($msg:expr) => {
        debug!(target: "gooddata", "{}", $msg)
    };
}
