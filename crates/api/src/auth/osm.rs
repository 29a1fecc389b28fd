//! OpenStreetMap OAuth2 authorization URL construction.
//!
//! The service does not hold sessions itself: the frontend sends the user to
//! the URL built here and OSM redirects back to the configured redirect URI.

use rand::distr::Alphanumeric;
use rand::Rng;
use url::Url;

use crate::config::OsmConfig;

/// Path of the authorization endpoint relative to the OSM base URL.
pub const AUTHORIZE_SEGMENTS: [&str; 2] = ["oauth2", "authorize"];

/// Length of the random `state` parameter.
pub const STATE_LEN: usize = 32;

/// Generate a random alphanumeric `state` value for one login attempt.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(STATE_LEN)
        .map(char::from)
        .collect()
}

/// Build the OSM authorization URL for `state`.
pub fn authorization_url(config: &OsmConfig, state: &str) -> Url {
    let mut url = config.url.clone();
    // `OsmConfig::url` is validated as a base URL, so this always succeeds.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(AUTHORIZE_SEGMENTS);
    }
    url.query_pairs_mut()
        .clear()
        .append_pair("response_type", "code")
        .append_pair("client_id", &config.client_id)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("scope", &config.scope)
        .append_pair("state", state);
    url
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn osm_config(base: &str) -> OsmConfig {
        OsmConfig {
            url: Url::parse(base).unwrap(),
            client_id: "client-123".into(),
            redirect_uri: "http://127.0.0.1:3000/frontend/authenticate/".into(),
            scope: "read_prefs".into(),
        }
    }

    #[test]
    fn url_targets_authorize_endpoint() {
        let url = authorization_url(&osm_config("https://www.openstreetmap.org"), "abc");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("www.openstreetmap.org"));
        assert_eq!(url.path(), "/oauth2/authorize");
    }

    #[test]
    fn url_keeps_base_path() {
        let url = authorization_url(&osm_config("https://osm.example.com/osm/"), "abc");
        assert_eq!(url.path(), "/osm/oauth2/authorize");
    }

    #[test]
    fn url_carries_oauth_parameters() {
        let url = authorization_url(&osm_config("https://www.openstreetmap.org"), "abc");
        let params: HashMap<_, _> = url.query_pairs().into_owned().collect();

        assert_eq!(params["response_type"], "code");
        assert_eq!(params["client_id"], "client-123");
        assert_eq!(
            params["redirect_uri"],
            "http://127.0.0.1:3000/frontend/authenticate/"
        );
        assert_eq!(params["scope"], "read_prefs");
        assert_eq!(params["state"], "abc");
    }

    #[test]
    fn state_is_random_alphanumeric() {
        let first = generate_state();
        let second = generate_state();

        assert_eq!(first.len(), STATE_LEN);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(first, second);
    }
}
