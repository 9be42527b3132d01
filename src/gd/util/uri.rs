// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

//! URI helpers.

/// Returns the final path segment of a resource URI, ignoring a single
/// trailing `/`. Empty segments yield `None`.
pub fn last_segment(uri: &str) -> Option<&str> {
    let trimmed = if uri.ends_with('/') {
        &uri[..uri.len() - 1]
    } else {
        uri
    };
    trimmed.rsplit('/').next().filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_segment_works_as_expected() {
        assert_eq!(last_segment("/gdc/projects/abc"), Some("abc"));
        assert_eq!(last_segment("/gdc/projects/abc/"), Some("abc"));
        assert_eq!(last_segment("abc"), Some("abc"));
        assert_eq!(last_segment("/gdc/projects//"), None);
        assert_eq!(last_segment(""), None);
    }
}
