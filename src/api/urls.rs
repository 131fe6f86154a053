//! URL building utilities for API endpoints

use std::fmt;

use super::client::non_blank;

/// Path and ordered query parameters of a single API request.
///
/// Path identifiers and query values are percent-encoded as they are added, so
/// free text such as nicknames can be passed through unchanged.
///
/// # Example
/// ```
/// use faceit_data::api::RequestUrl;
///
/// let url = RequestUrl::new("/search/players")
///     .param("nickname", "rain man")
///     .param("offset", 0)
///     .param("limit", 20);
/// assert_eq!(url.to_string(), "/search/players?nickname=rain%20man&offset=0&limit=20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    path: String,
    query: Vec<(&'static str, String)>,
}

impl RequestUrl {
    /// Starts a request for a literal resource path such as `/championships`.
    pub fn new(resource: &str) -> Self {
        Self {
            path: resource.to_string(),
            query: Vec::new(),
        }
    }

    /// Appends an identifier as an escaped path segment.
    ///
    /// # Example
    /// ```
    /// use faceit_data::api::RequestUrl;
    ///
    /// let url = RequestUrl::new("/teams").segment("a/b c");
    /// assert_eq!(url.to_string(), "/teams/a%2Fb%20c");
    /// ```
    pub fn segment(mut self, identifier: &str) -> Self {
        self.path.push('/');
        self.path.push_str(&urlencoding::encode(identifier));
        self
    }

    /// Appends a fixed path component such as `matches` without escaping.
    pub fn literal(mut self, component: &str) -> Self {
        self.path.push('/');
        self.path.push_str(component);
        self
    }

    /// Appends a query parameter.
    pub fn param(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Appends a query parameter only when a value is present.
    ///
    /// Values that render blank are treated as absent and never sent as `key=`.
    pub fn optional_param(self, key: &'static str, value: Option<impl fmt::Display>) -> Self {
        match value.map(|value| value.to_string()) {
            Some(value) if !value.trim().is_empty() => self.param(key, value),
            _ => self,
        }
    }

    /// Appends the first present refinement of two mutually exclusive ones.
    /// A blank preferred value falls through to the fallback.
    ///
    /// # Example
    /// ```
    /// use faceit_data::api::RequestUrl;
    ///
    /// let url = RequestUrl::new("/search/hubs").either_param(("game", Some("cs2")), ("region", Some("EU")));
    /// assert_eq!(url.to_string(), "/search/hubs?game=cs2");
    ///
    /// let url = RequestUrl::new("/search/hubs").either_param(("game", None), ("region", Some("EU")));
    /// assert_eq!(url.to_string(), "/search/hubs?region=EU");
    /// ```
    pub fn either_param(
        self,
        preferred: (&'static str, Option<&str>),
        fallback: (&'static str, Option<&str>),
    ) -> Self {
        match (non_blank(preferred.1), non_blank(fallback.1)) {
            (Some(value), _) => self.param(preferred.0, value),
            (None, Some(value)) => self.param(fallback.0, value),
            (None, None) => self,
        }
    }

    /// Appends pagination parameters in `offset`, `limit` order.
    pub fn page(self, offset: u32, limit: u32) -> Self {
        self.param("offset", offset).param("limit", limit)
    }

    /// Returns the escaped path without a query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Joins the request onto a base URL.
    ///
    /// # Example
    /// ```
    /// use faceit_data::api::RequestUrl;
    ///
    /// let url = RequestUrl::new("/matches").segment("1-abc").literal("stats");
    /// assert_eq!(
    ///     url.to_url("https://open.faceit.com/data/v4/"),
    ///     "https://open.faceit.com/data/v4/matches/1-abc/stats"
    /// );
    /// ```
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self)
    }
}

impl fmt::Display for RequestUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (index, (key, value)) in self.query.iter().enumerate() {
            let separator = if index == 0 { '?' } else { '&' };
            write!(f, "{separator}{key}={}", urlencoding::encode(value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_without_query() {
        let url = RequestUrl::new("/games").segment("csgo").literal("parent");
        assert_eq!(url.to_string(), "/games/csgo/parent");
        assert_eq!(url.path(), "/games/csgo/parent");
    }

    #[test]
    fn test_query_order_is_preserved() {
        let url = RequestUrl::new("/championships")
            .segment("abc")
            .literal("matches")
            .param("type", "past")
            .page(10, 5);
        assert_eq!(
            url.to_string(),
            "/championships/abc/matches?type=past&offset=10&limit=5"
        );
    }

    #[test]
    fn test_optional_param_omitted_when_absent() {
        let url = RequestUrl::new("/rankings")
            .optional_param("country", None::<&str>)
            .param("limit", 20);
        assert_eq!(url.to_string(), "/rankings?limit=20");
    }

    #[test]
    fn test_blank_values_are_not_sent() {
        let url = RequestUrl::new("/players")
            .optional_param("nickname", Some("s1mple"))
            .optional_param("game", Some(" "))
            .optional_param("game_player_id", Some(""));
        assert_eq!(url.to_string(), "/players?nickname=s1mple");
    }

    #[test]
    fn test_either_param_blank_preferred_falls_back() {
        let url = RequestUrl::new("/search/hubs").either_param(("game", Some("")), ("region", Some("EU")));
        assert_eq!(url.to_string(), "/search/hubs?region=EU");

        let url = RequestUrl::new("/search/hubs").either_param(("game", Some(" ")), ("region", Some("")));
        assert_eq!(url.to_string(), "/search/hubs");
    }

    #[test]
    fn test_reserved_characters_are_encoded_and_decode_back() {
        let nickname = "a b&c/d?e=f#g";
        let url = RequestUrl::new("/search/players").param("nickname", nickname);
        let rendered = url.to_string();

        let encoded = rendered.strip_prefix("/search/players?nickname=").unwrap();
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('/'));
        assert_eq!(urlencoding::decode(encoded).unwrap(), nickname);
    }

    #[test]
    fn test_segment_escapes_path_separators() {
        let url = RequestUrl::new("/players").segment("../admin");
        assert_eq!(url.to_string(), "/players/..%2Fadmin");
    }

    #[test]
    fn test_either_param_with_neither_present() {
        let url = RequestUrl::new("/search/teams").either_param(("game", None), ("region", None));
        assert_eq!(url.to_string(), "/search/teams");
    }

    #[test]
    fn test_to_url_without_trailing_slash() {
        let url = RequestUrl::new("/games").page(0, 20);
        assert_eq!(
            url.to_url("http://localhost:8080"),
            "http://localhost:8080/games?offset=0&limit=20"
        );
    }
}
