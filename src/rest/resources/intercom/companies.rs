//! Companies.
//!
//! A single [`Company`] keeps the collection URL and passes its identifier
//! as the `company_id` query parameter. Its users live one level deeper, at
//! `companies/{id}/users`.

use std::collections::HashMap;

use serde_json::Value;

use super::PageParams;
use crate::clients::HttpMethod;
use crate::rest::{
    join_url, resource_url, ApiCall, Capabilities, Operation, ResourceError, ResponseParser,
    RestResource,
};

const PATH: &str = "companies";

/// The companies collection.
#[derive(Debug, Clone)]
pub struct Companies {
    parent: String,
}

impl Companies {
    pub(crate) fn new(parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
        }
    }
}

impl RestResource for Companies {
    type GetParams = PageParams;
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "Companies";
    const CAPABILITIES: Capabilities = Capabilities::GET.union(Capabilities::CREATE);

    fn url(&self) -> String {
        join_url(&self.parent, PATH)
    }
}

/// A single company.
#[derive(Debug, Clone)]
pub struct Company {
    parent: String,
    company_id: String,
}

impl Company {
    pub(crate) fn new(parent: &str, company_id: String) -> Self {
        Self {
            parent: parent.to_string(),
            company_id,
        }
    }

    /// Returns the company identifier.
    #[must_use]
    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    /// Fetches the company's users.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request cannot be built.
    pub fn users(&self) -> Result<ApiCall, ResourceError> {
        let url = join_url(
            &resource_url(&self.parent, PATH, Some(self.company_id.as_str())),
            "users",
        );
        ApiCall::from_query(HttpMethod::Get, url, HashMap::new(), ResponseParser::Json)
    }
}

impl RestResource for Company {
    type GetParams = ();
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "Company";
    const CAPABILITIES: Capabilities = Capabilities::GET;

    fn url(&self) -> String {
        join_url(&self.parent, PATH)
    }

    fn get(&self, _params: ()) -> Result<ApiCall, ResourceError> {
        self.ensure_supported(Operation::Get)?;
        let query = HashMap::from([("company_id".to_string(), self.company_id.clone())]);
        ApiCall::from_query(HttpMethod::Get, self.url(), query, ResponseParser::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ROOT: &str = "https://api.intercom.io/v1";

    #[test]
    fn test_companies_get_and_create() {
        let companies = Companies::new(ROOT);

        let call = companies.get(PageParams::default()).unwrap();
        assert_eq!(call.request.url, "https://api.intercom.io/v1/companies");
        assert!(call.request.query.is_none());

        let call = companies.create(json!({"id": "6", "name": "Blue Sun"})).unwrap();
        assert_eq!(call.request.http_method, HttpMethod::Post);
    }

    #[test]
    fn test_companies_disable_update_and_delete() {
        let companies = Companies::new(ROOT);
        assert!(companies.update(json!({})).is_err());
        assert!(companies.delete().is_err());
    }

    #[test]
    fn test_company_get_sends_id_as_query() {
        let call = Company::new(ROOT, "42".to_string()).get(()).unwrap();

        assert_eq!(call.request.url, "https://api.intercom.io/v1/companies");
        let query = call.request.query.unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(query.get("company_id"), Some(&"42".to_string()));
    }

    #[test]
    fn test_company_users_nests_two_levels() {
        let call = Company::new(ROOT, "42".to_string()).users().unwrap();

        assert_eq!(call.request.http_method, HttpMethod::Get);
        assert_eq!(
            call.request.url,
            "https://api.intercom.io/v1/companies/42/users"
        );
        assert!(call.request.query.is_none());
    }

    #[test]
    fn test_company_disables_create() {
        assert!(matches!(
            Company::new(ROOT, "42".to_string()).create(json!({})),
            Err(ResourceError::MethodNotSupported {
                resource: "Company",
                operation: Operation::Create
            })
        ));
    }
}
