//! Personal to-do handlers.
//!
//! ```text
//! POST /employee/getTodos      POST /employee/addTodo
//! POST /employee/toggleTodo    POST /employee/deleteTodo
//! ```
//!
//! Every route is scoped to the caller's own email.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Todo, TodoId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::accounts::EmailRequest;
use crate::inbound::http::principal::Principal;
use crate::inbound::http::schemas::{ErrorSchema, TodoSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id, required_text};

const EMAIL_REQUIRED: &str = "Email is required";

/// New item.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTodoRequest {
    pub email: Option<String>,
    pub text: Option<String>,
}

/// Item addressed by id.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoRefRequest {
    pub email: Option<String>,
    pub todo_id: Option<String>,
}

/// Caller's items, newest first.
#[derive(Debug, Serialize, ToSchema)]
pub struct TodoListResponse {
    pub success: bool,
    #[schema(value_type = Vec<TodoSchema>)]
    pub todos: Vec<Todo>,
}

/// Acknowledgement with the affected item.
#[derive(Debug, Serialize, ToSchema)]
pub struct TodoResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<TodoSchema>)]
    pub todo: Option<Todo>,
}

impl TodoResponse {
    fn new(message: &str, todo: Option<Todo>) -> Self {
        Self {
            success: true,
            message: message.to_owned(),
            todo,
        }
    }
}

fn owner(principal: &Principal, email: Option<String>) -> Result<String, Error> {
    let email = required_text(email, FieldName::new("email"), EMAIL_REQUIRED)?;
    principal.require_employee(&email)?;
    Ok(email)
}

fn parse_ref(principal: &Principal, payload: TodoRefRequest) -> Result<(String, TodoId), Error> {
    let email = owner(principal, payload.email)?;
    let raw = required_text(
        payload.todo_id,
        FieldName::new("todoId"),
        "Todo ID is required",
    )?;
    Ok((email, parse_id(&raw, FieldName::new("todoId"))?))
}

/// List the caller's items.
#[utoipa::path(
    post,
    path = "/employee/getTodos",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Items", body = TodoListResponse),
        (status = 403, description = "Not the caller's email", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "getTodos"
)]
#[post("/employee/getTodos")]
pub async fn get_todos(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<EmailRequest>,
) -> ApiResult<web::Json<TodoListResponse>> {
    let email = owner(&principal, payload.into_inner().email)?;
    let todos = state.todos.list_todos(&email).await?;
    Ok(web::Json(TodoListResponse {
        success: true,
        todos,
    }))
}

/// Add an open item.
#[utoipa::path(
    post,
    path = "/employee/addTodo",
    request_body = AddTodoRequest,
    responses(
        (status = 200, description = "Added", body = TodoResponse),
        (status = 400, description = "Text missing", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "addTodo"
)]
#[post("/employee/addTodo")]
pub async fn add_todo(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<AddTodoRequest>,
) -> ApiResult<web::Json<TodoResponse>> {
    let AddTodoRequest { email, text } = payload.into_inner();
    let email = owner(&principal, email)?;
    let text = required_text(text, FieldName::new("text"), "Todo text is required")?;
    let todo = state.todos.add_todo(&email, text).await?;
    Ok(web::Json(TodoResponse::new("Todo added successfully", Some(todo))))
}

/// Flip an item's done flag.
#[utoipa::path(
    post,
    path = "/employee/toggleTodo",
    request_body = TodoRefRequest,
    responses(
        (status = 200, description = "Toggled", body = TodoResponse),
        (status = 404, description = "Todo not found", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "toggleTodo"
)]
#[post("/employee/toggleTodo")]
pub async fn toggle_todo(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<TodoRefRequest>,
) -> ApiResult<web::Json<TodoResponse>> {
    let (email, id) = parse_ref(&principal, payload.into_inner())?;
    let todo = state.todos.toggle_todo(&email, id).await?;
    Ok(web::Json(TodoResponse::new("Todo updated successfully", Some(todo))))
}

/// Remove an item.
#[utoipa::path(
    post,
    path = "/employee/deleteTodo",
    request_body = TodoRefRequest,
    responses(
        (status = 200, description = "Deleted", body = TodoResponse),
        (status = 404, description = "Todo not found", body = ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
#[post("/employee/deleteTodo")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<TodoRefRequest>,
) -> ApiResult<web::Json<TodoResponse>> {
    let (email, id) = parse_ref(&principal, payload.into_inner())?;
    state.todos.delete_todo(&email, id).await?;
    Ok(web::Json(TodoResponse::new("Todo deleted successfully", None)))
}
