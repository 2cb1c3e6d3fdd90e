/// Todo endpoints
///
/// All routes require a bearer access token (see [`crate::app::bearer_auth_layer`]);
/// the auth check runs before any body parsing or validation.
///
/// # Endpoints
///
/// - `POST   /api/todos` - Create a todo (provisioning its user)
/// - `GET    /api/todos?userId=...` - List a user's todos
/// - `PUT    /api/todos` - Partially update a todo
/// - `DELETE /api/todos?id=...` - Delete a todo

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidationErrorDetail},
    extract::ValidatedJson,
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use todolist_shared::{
    models::{Todo, TodoStatus, User},
    usecases::UpdateTodoInput,
};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Todo part of a create request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    /// Caller-chosen todo ID (UUID)
    #[validate(custom(function = "validate_uuid"))]
    pub id: String,

    /// Description
    pub description: String,

    /// One of `pending`, `progress`, `done`
    #[validate(custom(function = "validate_status"))]
    pub status: String,

    /// Owning user ID
    pub user_id: String,
}

/// User part of a create request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    /// User ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Email address
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    /// Tenant ID
    pub id_tenant: String,
}

/// Create todo request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(nested)]
    pub todo: TodoPayload,

    #[validate(nested)]
    pub user: UserPayload,
}

/// Update todo request
///
/// Omitted fields keep their current values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    /// Todo to update (UUID)
    #[validate(custom(function = "validate_uuid"))]
    pub id: String,

    /// New description
    pub description: Option<String>,

    /// New status
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// `GET /api/todos` query
#[derive(Debug, Deserialize)]
pub struct ListTodosQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// `DELETE /api/todos` query
#[derive(Debug, Deserialize)]
pub struct DeleteTodoQuery {
    pub id: Option<String>,
}

/// Confirmation body for write operations
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

// Each field kind has one parser. The validators run it to report issues,
// the conversions below run it again to obtain the typed value.

fn parse_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.message = Some("Invalid uuid".into());
        error
    })
}

fn parse_status(value: &str) -> Result<TodoStatus, ValidationError> {
    value.parse::<TodoStatus>().map_err(|e| {
        let mut error = ValidationError::new("enum");
        error.message = Some(e.to_string().into());
        error
    })
}

fn validate_uuid(value: &str) -> Result<(), ValidationError> {
    parse_uuid(value).map(|_| ())
}

fn validate_status(value: &str) -> Result<(), ValidationError> {
    parse_status(value).map(|_| ())
}

/// Attaches a field path to a parser failure
///
/// Only reachable for a request that skipped `validate()`.
fn typed<T>(field: &str, parsed: Result<T, ValidationError>) -> ApiResult<T> {
    parsed.map_err(|error| {
        ApiError::ValidationError(vec![ValidationErrorDetail {
            field: field.to_string(),
            message: error
                .message
                .map(|m| m.to_string())
                .unwrap_or_else(|| error.code.to_string()),
        }])
    })
}

impl CreateTodoRequest {
    /// Converts a validated request into domain entities
    pub fn into_domain(self) -> ApiResult<(Todo, User)> {
        let todo = Todo {
            id: typed("todo.id", parse_uuid(&self.todo.id))?,
            description: self.todo.description,
            status: typed("todo.status", parse_status(&self.todo.status))?,
            user_id: self.todo.user_id,
        };

        let user = User {
            id: self.user.id,
            name: self.user.name,
            email: self.user.email,
            id_tenant: self.user.id_tenant,
        };

        Ok((todo, user))
    }
}

impl UpdateTodoRequest {
    /// Converts a validated request into use case input
    pub fn into_input(self) -> ApiResult<UpdateTodoInput> {
        let status = match self.status.as_deref() {
            Some(raw) => Some(typed("status", parse_status(raw))?),
            None => None,
        };

        Ok(UpdateTodoInput {
            id: typed("id", parse_uuid(&self.id))?,
            description: self.description,
            status,
        })
    }
}

/// Returns the parameter when present and non-empty
fn required_param(value: Option<String>, name: &str) -> ApiResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("{} is required", name)))
}

/// Create a todo
///
/// # Endpoint
///
/// ```text
/// POST /api/todos
/// Authorization: Bearer <access_token>
/// Content-Type: application/json
///
/// {
///   "todo": {
///     "id": "11111111-1111-1111-1111-111111111111",
///     "description": "buy milk",
///     "status": "pending",
///     "userId": "u1"
///   },
///   "user": { "id": "u1", "name": "A", "email": "a@x.com", "idTenant": "t1" }
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "message": "Todo created" }`
///
/// # Errors
///
/// - `400 Bad Request`: Body failed validation (issue list in `details`)
/// - `401 Unauthorized`: Missing or invalid access token
/// - `500 Internal Server Error`: Store failure (including duplicate todo ID)
pub async fn create_todo(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTodoRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let (todo, user) = req.into_domain()?;

    state.usecases.create_todo.execute(todo, user).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("Todo created"))))
}

/// List a user's todos
///
/// # Endpoint
///
/// ```text
/// GET /api/todos?userId=u1
/// Authorization: Bearer <access_token>
/// ```
///
/// # Response
///
/// `200 OK` with a JSON array of todos (possibly empty)
///
/// # Errors
///
/// - `400 Bad Request`: `userId` missing
/// - `401 Unauthorized`: Missing or invalid access token
pub async fn list_todos(
    State(state): State<AppState>,
    query: Result<Query<ListTodosQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Todo>>> {
    let Query(query) = query?;
    let user_id = required_param(query.user_id, "userId")?;

    let todos = state.usecases.get_todos.execute(&user_id).await?;

    Ok(Json(todos))
}

/// Partially update a todo
///
/// # Endpoint
///
/// ```text
/// PUT /api/todos
/// Authorization: Bearer <access_token>
/// Content-Type: application/json
///
/// { "id": "11111111-1111-1111-1111-111111111111", "status": "done" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Body failed validation
/// - `401 Unauthorized`: Missing or invalid access token
/// - `404 Not Found`: No todo with that ID
pub async fn update_todo(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<UpdateTodoRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let input = req.into_input()?;

    state.usecases.update_todo.execute(input).await?;

    Ok(Json(MessageResponse::new("Todo updated")))
}

/// Delete a todo
///
/// Deleting an already-deleted todo returns 404.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/todos?id=11111111-1111-1111-1111-111111111111
/// Authorization: Bearer <access_token>
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: `id` missing
/// - `401 Unauthorized`: Missing or invalid access token
/// - `404 Not Found`: No todo with that ID
pub async fn delete_todo(
    State(state): State<AppState>,
    query: Result<Query<DeleteTodoQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(query) = query?;
    let raw_id = required_param(query.id, "id")?;

    // A non-UUID can never match a stored todo.
    let id = Uuid::parse_str(&raw_id)
        .map_err(|_| ApiError::NotFound("Todo not found".to_string()))?;

    state.usecases.delete_todo.execute(id).await?;

    Ok(Json(MessageResponse::new("Todo deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateTodoRequest {
        CreateTodoRequest {
            todo: TodoPayload {
                id: "11111111-1111-1111-1111-111111111111".to_string(),
                description: "buy milk".to_string(),
                status: "pending".to_string(),
                user_id: "u1".to_string(),
            },
            user: UserPayload {
                id: "u1".to_string(),
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                id_tenant: "t1".to_string(),
            },
        }
    }

    #[test]
    fn test_create_request_into_domain() {
        let req = valid_create();
        assert!(req.validate().is_ok());

        let (todo, user) = req.into_domain().unwrap();
        assert_eq!(todo.status, TodoStatus::Pending);
        assert_eq!(todo.user_id, "u1");
        assert_eq!(user.id_tenant, "t1");
    }

    #[test]
    fn test_create_request_reports_each_issue() {
        let mut req = valid_create();
        req.todo.id = "not-a-uuid".to_string();
        req.todo.status = "finished".to_string();
        req.user.email = "nope".to_string();

        let err: ApiError = req.validate().unwrap_err().into();
        let fields: Vec<String> = match err {
            ApiError::ValidationError(details) => details.into_iter().map(|d| d.field).collect(),
            other => panic!("expected validation error, got {:?}", other),
        };
        assert_eq!(fields, vec!["todo.id", "todo.status", "user.email"]);
    }

    #[test]
    fn test_update_request_optional_fields() {
        let req = UpdateTodoRequest {
            id: "11111111-1111-1111-1111-111111111111".to_string(),
            description: None,
            status: None,
        };
        assert!(req.validate().is_ok());

        let input = req.into_input().unwrap();
        assert!(input.description.is_none());
        assert!(input.status.is_none());

        let bad = UpdateTodoRequest {
            id: "11111111-1111-1111-1111-111111111111".to_string(),
            description: None,
            status: Some("Done".to_string()),
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_conversion_reports_field_for_unvalidated_input() {
        let req = UpdateTodoRequest {
            id: "nope".to_string(),
            description: None,
            status: None,
        };

        match req.into_input() {
            Err(ApiError::ValidationError(details)) => {
                assert_eq!(
                    details,
                    vec![ValidationErrorDetail {
                        field: "id".to_string(),
                        message: "Invalid uuid".to_string(),
                    }]
                );
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_required_param() {
        assert_eq!(required_param(Some("u1".to_string()), "userId").unwrap(), "u1");
        assert!(matches!(
            required_param(Some(String::new()), "userId"),
            Err(ApiError::BadRequest(ref msg)) if msg == "userId is required"
        ));
        assert!(required_param(None, "id").is_err());
    }
}
