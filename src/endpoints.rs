//! The dashboard's route URIs.
//!
//! For endpoints that take a parameter, e.g., '/staff/{staff_id}/access', use [format_endpoint].

/// The root route which redirects to the collection history.
pub const ROOT: &str = "/";
/// The page listing recorded cash collections.
pub const HISTORY_VIEW: &str = "/collections/history";
/// The page for recording a new cash collection.
pub const NEW_COLLECTION_VIEW: &str = "/collections/new";
/// The page listing staff members.
pub const STAFF_VIEW: &str = "/staff";
/// The page for editing a staff member's region/branch/centre access.
pub const EDIT_ACCESS_VIEW: &str = "/staff/{staff_id}/access";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to submit a new cash collection.
pub const POST_COLLECTION: &str = "/api/collections";
/// The route to replace a staff member's access selection.
pub const PUT_ACCESS: &str = "/api/staff/{staff_id}/access";
/// The partial returning the filtered centre rows for the history filter.
pub const CENTRE_OPTIONS_PARTIAL: &str = "/partials/centre-options";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/staff/{staff_id}/access',
/// '{staff_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::HISTORY_VIEW);
        assert_endpoint_is_valid_uri(endpoints::NEW_COLLECTION_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STAFF_VIEW);
        assert_endpoint_is_valid_uri(endpoints::EDIT_ACCESS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);

        assert_endpoint_is_valid_uri(endpoints::POST_COLLECTION);
        assert_endpoint_is_valid_uri(endpoints::PUT_ACCESS);
        assert_endpoint_is_valid_uri(endpoints::CENTRE_OPTIONS_PARTIAL);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/staff/{staff_id}/access", "u42");

        assert_eq!(formatted_path, "/staff/u42/access");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", "1");

        assert_eq!(formatted_path, "/hello/world");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint("/hello/{world}/bye", "1");

        assert_eq!(formatted_path, "/hello/1/bye");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
