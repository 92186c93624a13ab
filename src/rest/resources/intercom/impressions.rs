//! User impressions. Create only.

use serde_json::Value;

use crate::rest::{join_url, Capabilities, RestResource};

/// Records an impression of a user in the app.
#[derive(Debug, Clone)]
pub struct Impressions {
    parent: String,
}

impl Impressions {
    pub(crate) fn new(parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
        }
    }
}

impl RestResource for Impressions {
    type GetParams = Value;
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "Impressions";
    const CAPABILITIES: Capabilities = Capabilities::CREATE;

    fn url(&self) -> String {
        join_url(&self.parent, "users/impressions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_create_posts_to_nested_path() {
        let call = Impressions::new("https://api.intercom.io/v1")
            .create(json!({"email": "ann@example.com", "user_ip": "1.2.3.4"}))
            .unwrap();

        assert_eq!(call.request.http_method, HttpMethod::Post);
        assert_eq!(
            call.request.url,
            "https://api.intercom.io/v1/users/impressions"
        );
    }

    #[test]
    fn test_only_create_is_supported() {
        let impressions = Impressions::new("https://api.intercom.io/v1");
        assert!(impressions.get(json!({"page": 1})).is_err());
        assert!(impressions.update(json!({})).is_err());
        assert!(impressions.delete().is_err());
    }
}
