//! Task assignment and status handlers.
//!
//! ```text
//! POST /manager/assignTask              PUT  /manager/tasks/{taskId}/status
//! POST /manager/updateTaskStatus        POST /employee/getTasks
//! POST /employee/updateTaskStatus
//! ```

use actix_web::{HttpResponse, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{TaskActor, UpdateTaskStatusRequest};
use crate::domain::{Error, Task, TaskDraft, TaskId, TaskStatus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::accounts::{EmailRequest, MessageResponse};
use crate::inbound::http::principal::Principal;
use crate::inbound::http::schemas::{ErrorSchema, TaskSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_id, parse_instant, parse_status, required_text,
};

const ALL_FIELDS: &str = "All fields are required";
const STATUS_REQUIRED: &str = "Status is required";
const TASK_AND_STATUS: &str = "Task ID and status are required";
const EMAIL_REQUIRED: &str = "Email is required";

/// Assignment payload.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignTaskRequest {
    pub employee_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// RFC 3339 timestamp or `YYYY-MM-DD`.
    pub deadline: Option<String>,
}

/// Body of `PUT /manager/tasks/{taskId}/status`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusBody {
    pub status: Option<String>,
    pub expected_revision: Option<u32>,
}

/// Status change naming the task in the body.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatusBody {
    /// Acting employee; ignored on the manager route.
    pub email: Option<String>,
    pub task_id: Option<String>,
    pub status: Option<String>,
    pub expected_revision: Option<u32>,
}

/// Result of an assignment.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignTaskResponse {
    pub message: String,
    pub employee_name: String,
    #[schema(value_type = TaskSchema)]
    pub task: Task,
}

/// Acknowledgement carrying the moved task.
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskStatusResponse {
    pub message: String,
    #[schema(value_type = TaskSchema)]
    pub task: Task,
}

/// An employee's tasks.
#[derive(Debug, Serialize, ToSchema)]
pub struct TaskListResponse {
    pub success: bool,
    #[schema(value_type = Vec<TaskSchema>)]
    pub tasks: Vec<Task>,
}

fn parse_assignment(payload: AssignTaskRequest) -> Result<TaskDraft, Error> {
    let employee_id = required_text(payload.employee_id, FieldName::new("employeeId"), ALL_FIELDS)?;
    let title = required_text(payload.title, FieldName::new("title"), ALL_FIELDS)?;
    let description =
        required_text(payload.description, FieldName::new("description"), ALL_FIELDS)?;
    let deadline = required_text(payload.deadline, FieldName::new("deadline"), ALL_FIELDS)?;
    Ok(TaskDraft {
        employee_id: parse_id(&employee_id, FieldName::new("employeeId"))?,
        title,
        description,
        deadline: parse_instant(&deadline, FieldName::new("deadline"))?,
    })
}

fn parse_task_id(raw: Option<String>) -> Result<TaskId, Error> {
    let raw = required_text(raw, FieldName::new("taskId"), TASK_AND_STATUS)?;
    parse_id(&raw, FieldName::new("taskId"))
}

fn parse_task_status(raw: Option<String>, message: &str) -> Result<TaskStatus, Error> {
    let raw = required_text(raw, FieldName::new("status"), message)?;
    parse_status(&raw, FieldName::new("status"))
}

/// Assign a new pending task.
#[utoipa::path(
    post,
    path = "/manager/assignTask",
    request_body = AssignTaskRequest,
    responses(
        (status = 201, description = "Assigned", body = AssignTaskResponse),
        (status = 400, description = "Missing or malformed fields", body = ErrorSchema),
        (status = 403, description = "Caller is not a manager", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "assignTask"
)]
#[post("/manager/assignTask")]
pub async fn assign_task(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<AssignTaskRequest>,
) -> ApiResult<HttpResponse> {
    principal.require_manager()?;
    let draft = parse_assignment(payload.into_inner())?;
    let assigned = state.tasks.assign_task(draft).await?;
    Ok(HttpResponse::Created().json(AssignTaskResponse {
        message: "Task assigned successfully".to_owned(),
        employee_name: assigned.employee_name,
        task: assigned.task,
    }))
}

/// Move a task addressed by path.
#[utoipa::path(
    put,
    path = "/manager/tasks/{taskId}/status",
    params(("taskId" = String, Path, description = "Task identifier")),
    request_body = TaskStatusBody,
    responses(
        (status = 200, description = "Updated", body = TaskStatusResponse),
        (status = 400, description = "Missing or unknown status", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 409, description = "Revision mismatch", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "putTaskStatus"
)]
#[put("/manager/tasks/{taskId}/status")]
pub async fn put_task_status(
    state: web::Data<HttpState>,
    principal: Principal,
    path: web::Path<String>,
    payload: web::Json<TaskStatusBody>,
) -> ApiResult<web::Json<TaskStatusResponse>> {
    principal.require_manager()?;
    let task_id = parse_id(&path.into_inner(), FieldName::new("taskId"))?;
    let TaskStatusBody {
        status,
        expected_revision,
    } = payload.into_inner();
    let status = parse_task_status(status, STATUS_REQUIRED)?;
    let task = state
        .tasks
        .update_task_status(UpdateTaskStatusRequest {
            task_id,
            status,
            expected_revision,
            actor: TaskActor::Manager,
        })
        .await?;
    Ok(web::Json(TaskStatusResponse {
        message: "Task status updated".to_owned(),
        task,
    }))
}

/// Move a task named in the body.
#[utoipa::path(
    post,
    path = "/manager/updateTaskStatus",
    request_body = UpdateTaskStatusBody,
    responses(
        (status = 200, description = "Updated", body = MessageResponse),
        (status = 400, description = "Missing or unknown status", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 409, description = "Revision mismatch", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "managerUpdateTaskStatus"
)]
#[post("/manager/updateTaskStatus")]
pub async fn manager_update_task_status(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<UpdateTaskStatusBody>,
) -> ApiResult<HttpResponse> {
    principal.require_manager()?;
    let UpdateTaskStatusBody {
        task_id,
        status,
        expected_revision,
        ..
    } = payload.into_inner();
    let task_id = parse_task_id(task_id)?;
    let status = parse_task_status(status, TASK_AND_STATUS)?;
    state
        .tasks
        .update_task_status(UpdateTaskStatusRequest {
            task_id,
            status,
            expected_revision,
            actor: TaskActor::Manager,
        })
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Task status updated successfully".to_owned(),
    }))
}

/// Tasks assigned to the caller.
#[utoipa::path(
    post,
    path = "/employee/getTasks",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Tasks, earliest deadline first", body = TaskListResponse),
        (status = 403, description = "Not the caller's email", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "getTasks"
)]
#[post("/employee/getTasks")]
pub async fn get_tasks(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<EmailRequest>,
) -> ApiResult<web::Json<TaskListResponse>> {
    let email = required_text(payload.into_inner().email, FieldName::new("email"), EMAIL_REQUIRED)?;
    principal.require_employee(&email)?;
    let tasks = state.tasks.tasks_for_employee(&email).await?;
    Ok(web::Json(TaskListResponse {
        success: true,
        tasks,
    }))
}

/// Move one of the caller's own tasks.
#[utoipa::path(
    post,
    path = "/employee/updateTaskStatus",
    request_body = UpdateTaskStatusBody,
    responses(
        (status = 200, description = "Updated", body = TaskStatusResponse),
        (status = 403, description = "Task belongs to someone else", body = ErrorSchema),
        (status = 404, description = "Task not found", body = ErrorSchema),
        (status = 409, description = "Revision mismatch", body = ErrorSchema)
    ),
    tags = ["tasks"],
    operation_id = "employeeUpdateTaskStatus"
)]
#[post("/employee/updateTaskStatus")]
pub async fn employee_update_task_status(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<UpdateTaskStatusBody>,
) -> ApiResult<web::Json<TaskStatusResponse>> {
    let UpdateTaskStatusBody {
        email,
        task_id,
        status,
        expected_revision,
    } = payload.into_inner();
    let email = required_text(email, FieldName::new("email"), EMAIL_REQUIRED)?;
    principal.require_employee(&email)?;
    let task_id = parse_task_id(task_id)?;
    let status = parse_task_status(status, TASK_AND_STATUS)?;
    let task = state
        .tasks
        .update_task_status(UpdateTaskStatusRequest {
            task_id,
            status,
            expected_revision,
            actor: TaskActor::Employee { email },
        })
        .await?;
    Ok(web::Json(TaskStatusResponse {
        message: "Task status updated successfully".to_owned(),
        task,
    }))
}

#[cfg(test)]
#[path = "tasks_tests.rs"]
mod tests;
