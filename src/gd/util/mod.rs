// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

//! Miscellaneous helpers shared by the API client.

pub mod futures;
pub mod json;
pub mod uri;
