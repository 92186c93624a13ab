//! Message threads.
//!
//! Both resources share the `users/message_threads` path. Every read needs
//! a `user_id` or `email`; a single thread additionally needs its
//! `thread_id`.

use serde::Serialize;
use serde_json::Value;

use super::UserLookup;
use crate::clients::HttpMethod;
use crate::rest::{
    join_url, ApiCall, Capabilities, RequestParams, ResourceError, ResponseParser, RestResource,
};

const PATH: &str = "users/message_threads";

/// The message threads of one user.
#[derive(Debug, Clone)]
pub struct MessageThreads {
    parent: String,
}

impl MessageThreads {
    pub(crate) fn new(parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
        }
    }

    /// Replies to a thread, as an admin or as the user.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] if the request cannot be built.
    pub fn reply(&self, obj: Value) -> Result<ApiCall, ResourceError> {
        ApiCall::from_body(
            HttpMethod::Put,
            self.url(),
            self.wrap_object(obj),
            ResponseParser::Json,
        )
    }
}

impl RestResource for MessageThreads {
    type GetParams = UserLookup;
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "MessageThreads";
    const CAPABILITIES: Capabilities = Capabilities::GET.union(Capabilities::CREATE);

    fn url(&self) -> String {
        join_url(&self.parent, PATH)
    }
}

/// Parameters for fetching a single thread.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageThreadLookup {
    /// The thread to return.
    pub thread_id: u64,

    /// The user the thread belongs to.
    #[serde(flatten)]
    pub user: UserLookup,
}

impl MessageThreadLookup {
    /// Creates a lookup for `thread_id` owned by `user`.
    #[must_use]
    pub const fn new(thread_id: u64, user: UserLookup) -> Self {
        Self { thread_id, user }
    }
}

impl RequestParams for MessageThreadLookup {
    fn validate(&self, operation: &'static str) -> Result<(), ResourceError> {
        self.user.validate(operation)
    }
}

/// A single message thread.
#[derive(Debug, Clone)]
pub struct MessageThread {
    parent: String,
}

impl MessageThread {
    pub(crate) fn new(parent: &str) -> Self {
        Self {
            parent: parent.to_string(),
        }
    }
}

impl RestResource for MessageThread {
    type GetParams = MessageThreadLookup;
    type CreateBody = Value;
    type UpdateBody = Value;

    const NAME: &'static str = "MessageThread";
    const CAPABILITIES: Capabilities = Capabilities::GET;

    fn url(&self) -> String {
        join_url(&self.parent, PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::Operation;
    use serde_json::json;

    const ROOT: &str = "https://api.intercom.io/v1";

    #[test]
    fn test_threads_get_requires_user() {
        let result = MessageThreads::new(ROOT).get(UserLookup::default());
        assert!(matches!(
            result,
            Err(ResourceError::MissingParameter { operation: "get", .. })
        ));
    }

    #[test]
    fn test_reply_puts_to_collection() {
        let call = MessageThreads::new(ROOT)
            .reply(json!({"thread_id": 5, "body": "thanks", "email": "a@b.c"}))
            .unwrap();

        assert_eq!(call.request.http_method, HttpMethod::Put);
        assert_eq!(
            call.request.url,
            "https://api.intercom.io/v1/users/message_threads"
        );
        assert_eq!(call.parser, ResponseParser::Json);
    }

    #[test]
    fn test_threads_disable_update_and_delete() {
        let threads = MessageThreads::new(ROOT);
        assert!(matches!(
            threads.update(json!({})),
            Err(ResourceError::MethodNotSupported {
                operation: Operation::Update,
                ..
            })
        ));
        assert!(threads.delete().is_err());
    }

    #[test]
    fn test_single_thread_query_carries_thread_and_user() {
        let call = MessageThread::new(ROOT)
            .get(MessageThreadLookup::new(17, UserLookup::by_user_id("u-9")))
            .unwrap();
        let query = call.request.query.unwrap();

        assert_eq!(query.len(), 2);
        assert_eq!(query.get("thread_id"), Some(&"17".to_string()));
        assert_eq!(query.get("user_id"), Some(&"u-9".to_string()));
    }

    #[test]
    fn test_single_thread_requires_user_even_with_thread_id() {
        let lookup = MessageThreadLookup::new(17, UserLookup::default());
        let result = MessageThread::new(ROOT).get(lookup);
        assert!(matches!(result, Err(ResourceError::MissingParameter { .. })));
    }

    #[test]
    fn test_single_thread_disables_create() {
        assert!(MessageThread::new(ROOT).create(json!({})).is_err());
    }
}
