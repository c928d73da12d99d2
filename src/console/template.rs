use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
});

/// Documented endpoint such as `/api/orders/{order_id}/status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTemplate {
    raw: String,
}

impl EndpointTemplate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in order of appearance, without duplicates.
    pub fn placeholders(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for cap in PLACEHOLDER.captures_iter(&self.raw) {
            let name = cap[1].to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    /// Substitute `{name}` with the supplied value. Placeholders without a value are left
    /// untouched.
    pub fn render(&self, params: &HashMap<String, String>) -> String {
        PLACEHOLDER
            .replace_all(&self.raw, |cap: &regex::Captures| match params.get(&cap[1]) {
                Some(value) => value.clone(),
                None => cap[0].to_string(),
            })
            .into_owned()
    }
}

impl fmt::Display for EndpointTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for EndpointTemplate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        let t = EndpointTemplate::new("/api/orders/{order_id}/items/{item_id}/{order_id}");
        assert_eq!(t.placeholders(), vec!["order_id", "item_id"]);
        assert!(EndpointTemplate::new("/api/users").placeholders().is_empty());
    }

    #[test]
    fn test_render_substitutes_known_params() {
        let t = EndpointTemplate::new("/api/orders/{order_id}/status");
        let mut params = HashMap::new();
        params.insert("order_id".to_string(), "9".to_string());
        assert_eq!(t.render(&params), "/api/orders/9/status");
    }

    #[test]
    fn test_render_leaves_missing_params() {
        let t = EndpointTemplate::new("/api/users/{user_id}");
        assert_eq!(t.render(&HashMap::new()), "/api/users/{user_id}");
    }
}
