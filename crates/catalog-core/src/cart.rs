//! Cart Replies
//!
//! Decoding of `/addtocart` and `/removefromcart` replies into the status
//! line shown on the item page.

use serde::Deserialize;
use serde_json::Value;

use crate::config::CatalogConfig;
use crate::error::CatalogError;

/// One element of the reply array. Only `error` decides the outcome.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CartReply {
    /// Usually a string; any other JSON value is accepted and shown as text
    #[serde(default)]
    pub error: Option<Value>,
}

impl CartReply {
    /// The error text, if `error` is set to anything truthy.
    /// `null`, `false`, `0` and `""` count as no error.
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(message) if message.is_empty() => None,
            Value::String(message) => Some(message.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    Add,
    Remove,
}

impl CartAction {
    pub fn url(self, item_id: u32, config: &CatalogConfig) -> String {
        match self {
            CartAction::Add => config.add_to_cart_url(item_id),
            CartAction::Remove => config.remove_from_cart_url(item_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOutcome {
    Accepted,
    Rejected(String),
}

impl CartOutcome {
    /// The first reply element decides; an empty `error` counts as success
    pub fn from_replies(replies: &[CartReply]) -> Self {
        match replies.first() {
            None => CartOutcome::Rejected("Empty response".to_string()),
            Some(reply) => match reply.error_message() {
                Some(message) => CartOutcome::Rejected(message),
                None => CartOutcome::Accepted,
            },
        }
    }

    pub fn status(&self, action: CartAction, config: &CatalogConfig) -> StatusLine {
        match self {
            CartOutcome::Rejected(message) => StatusLine {
                text: message.clone(),
                color: None,
            },
            CartOutcome::Accepted => StatusLine {
                text: match action {
                    CartAction::Add => config.added_message.clone(),
                    CartAction::Remove => config.removed_message.clone(),
                },
                color: Some(config.success_color.clone()),
            },
        }
    }
}

/// Text for the status element. `color: None` restores the stylesheet color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub color: Option<String>,
}

/// Item id is the trailing run of digits: `"12"` and `"addTo-cart12"` both give 12
pub fn item_id_from_control(control_id: &str) -> Result<u32, CatalogError> {
    let prefix_len = control_id.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    control_id[prefix_len..]
        .parse()
        .map_err(|_| CatalogError::InvalidControlId(control_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replies(json: &str) -> Vec<CartReply> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_error_reply_uses_default_color() {
        let config = CatalogConfig::default();
        let outcome = CartOutcome::from_replies(&replies(r#"[{"error": "out of stock"}]"#));

        assert_eq!(outcome, CartOutcome::Rejected("out of stock".to_string()));
        assert_eq!(
            outcome.status(CartAction::Add, &config),
            StatusLine { text: "out of stock".to_string(), color: None }
        );
    }

    #[test]
    fn test_reply_without_error_is_success() {
        let config = CatalogConfig::default();
        let outcome = CartOutcome::from_replies(&replies("[{}]"));

        assert_eq!(outcome, CartOutcome::Accepted);
        assert_eq!(
            outcome.status(CartAction::Add, &config),
            StatusLine { text: "Added successfully".to_string(), color: Some("#00ff00".to_string()) }
        );
    }

    #[test]
    fn test_server_success_payload() {
        let outcome = CartOutcome::from_replies(&replies(r#"[{"success": true, "fail": false}]"#));
        assert_eq!(outcome, CartOutcome::Accepted);
        assert_eq!(
            outcome.status(CartAction::Remove, &CatalogConfig::default()).text,
            "Removed successfully"
        );
    }

    #[test]
    fn test_empty_error_and_empty_array() {
        assert_eq!(CartOutcome::from_replies(&replies(r#"[{"error": ""}]"#)), CartOutcome::Accepted);
        assert_eq!(
            CartOutcome::from_replies(&[]),
            CartOutcome::Rejected("Empty response".to_string())
        );
    }

    #[test]
    fn test_non_string_error_is_still_shown() {
        assert_eq!(
            CartOutcome::from_replies(&replies(r#"[{"error": true}]"#)),
            CartOutcome::Rejected("true".to_string())
        );
        assert_eq!(
            CartOutcome::from_replies(&replies(r#"[{"error": 404}]"#)),
            CartOutcome::Rejected("404".to_string())
        );
        assert_eq!(CartOutcome::from_replies(&replies(r#"[{"error": false}]"#)), CartOutcome::Accepted);
        assert_eq!(CartOutcome::from_replies(&replies(r#"[{"error": null}]"#)), CartOutcome::Accepted);
    }

    #[test]
    fn test_item_id_from_control() {
        assert_eq!(item_id_from_control("12"), Ok(12));
        assert_eq!(item_id_from_control("addTo-cart7"), Ok(7));
        assert_eq!(
            item_id_from_control("add-to-cart"),
            Err(CatalogError::InvalidControlId("add-to-cart".to_string()))
        );
        assert!(item_id_from_control("").is_err());
    }

    #[test]
    fn test_action_urls() {
        let config = CatalogConfig::default();
        assert_eq!(CartAction::Add.url(5, &config), "/addtocart/5");
        assert_eq!(CartAction::Remove.url(5, &config), "/removefromcart/5");
    }
}
