// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

use serde::{Deserialize, Deserializer};

/// Decodes an explicit `null` the same way as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
