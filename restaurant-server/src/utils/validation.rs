//! Input validation helpers
//!
//! Presence and type checks only. Text is not trimmed or length-limited:
//! whatever non-empty string the client sends is stored as is.

use serde_json::Value;
use shared::models::{DishRef, OrderCreate, TableRequestCreate, UserCreate};
use shared::request::{OrderRequest, SignupRequest, TableRequestRequest};

use crate::utils::{AppError, AppResult, ErrorCode};

/// A required string must be present and non-empty
pub fn require_text(value: Option<String>, field: &str) -> AppResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::required(field)),
    }
}

/// Signup needs both fields
pub fn validate_signup(req: SignupRequest) -> AppResult<UserCreate> {
    Ok(UserCreate {
        username: require_text(req.signup_username, "signupUsername")?,
        password: require_text(req.signup_password, "signupPassword")?,
    })
}

/// `dishes` must be a non-empty array, `totalPrice` a JSON number
pub fn validate_order(req: OrderRequest) -> AppResult<OrderCreate> {
    let requester_name = require_text(req.requester_name, "requesterName")?;
    let dishes = require_dishes(req.dishes)?;
    let total_price = require_price(req.total_price)?;

    Ok(OrderCreate {
        requester_name,
        dishes,
        total_price,
    })
}

fn require_dishes(dishes: Option<Value>) -> AppResult<Vec<DishRef>> {
    match dishes {
        None | Some(Value::Null) => Err(AppError::required("dishes")),
        Some(Value::Array(items)) if items.is_empty() => Err(AppError::new(ErrorCode::OrderEmpty)),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(
            AppError::with_message(ErrorCode::InvalidFormat, "dishes must be an array")
                .with_detail("field", "dishes"),
        ),
    }
}

fn require_price(total_price: Option<Value>) -> AppResult<f64> {
    total_price
        .as_ref()
        .and_then(Value::as_f64)
        .ok_or_else(|| AppError::new(ErrorCode::OrderInvalidTotal).with_detail("field", "totalPrice"))
}

/// Both fields must be present and not blank (empty label or 0)
pub fn validate_table_request(req: TableRequestRequest) -> AppResult<TableRequestCreate> {
    let requester_name = require_text(req.requester_name, "requesterName")?;
    let table_number = req
        .table_number
        .filter(|n| !n.is_blank())
        .ok_or_else(|| AppError::required("tableNumber"))?;

    Ok(TableRequestCreate {
        requester_name,
        table_number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(value: Value) -> OrderRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(Some("bob".into()), "name").unwrap(), "bob");
        assert_eq!(
            require_text(None, "name").unwrap_err().code,
            ErrorCode::RequiredField
        );
        assert!(require_text(Some(String::new()), "name").is_err());
        // whitespace is kept as is
        assert_eq!(require_text(Some(" ".into()), "name").unwrap(), " ");
    }

    #[test]
    fn test_valid_order() {
        let created =
            validate_order(order(json!({"requesterName": "bob", "dishes": ["soup"], "totalPrice": 9.5})))
                .unwrap();
        assert_eq!(created.requester_name, "bob");
        assert_eq!(created.dishes, vec![json!("soup")]);
        assert_eq!(created.total_price, 9.5);
    }

    #[test]
    fn test_integer_price_is_numeric() {
        let created =
            validate_order(order(json!({"requesterName": "bob", "dishes": ["soup"], "totalPrice": 12})))
                .unwrap();
        assert_eq!(created.total_price, 12.0);
    }

    #[test]
    fn test_order_rejections() {
        let cases = [
            (json!({"dishes": ["soup"], "totalPrice": 1}), ErrorCode::RequiredField),
            (json!({"requesterName": "bob", "totalPrice": 1}), ErrorCode::RequiredField),
            (
                json!({"requesterName": "bob", "dishes": [], "totalPrice": 1}),
                ErrorCode::OrderEmpty,
            ),
            (
                json!({"requesterName": "bob", "dishes": "soup", "totalPrice": 1}),
                ErrorCode::InvalidFormat,
            ),
            (
                json!({"requesterName": "bob", "dishes": ["soup"], "totalPrice": "9.5"}),
                ErrorCode::OrderInvalidTotal,
            ),
            (
                json!({"requesterName": "bob", "dishes": ["soup"]}),
                ErrorCode::OrderInvalidTotal,
            ),
        ];

        for (body, expected) in cases {
            let err = validate_order(order(body.clone())).unwrap_err();
            assert_eq!(err.code, expected, "body: {body}");
            assert_eq!(err.http_status(), axum::http::StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_table_request_rejects_blank_number() {
        let req: TableRequestRequest =
            serde_json::from_value(json!({"requesterName": "carol", "tableNumber": 0})).unwrap();
        let err = validate_table_request(req).unwrap_err();
        assert_eq!(err.message, "tableNumber is required");

        let req: TableRequestRequest =
            serde_json::from_value(json!({"requesterName": "carol", "tableNumber": "4"})).unwrap();
        let created = validate_table_request(req).unwrap();
        assert_eq!(created.table_number.to_string(), "4");
    }

    #[test]
    fn test_signup_requires_both_fields() {
        let req: SignupRequest = serde_json::from_value(json!({"signupUsername": "alice"})).unwrap();
        assert_eq!(
            validate_signup(req).unwrap_err().message,
            "signupPassword is required"
        );
    }
}
