//! Manager staff views and team membership.
//!
//! ```text
//! GET  /manager/employees     POST /manager/addEmployee
//! GET  /manager/team          GET  /manager/dashboard
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{EmployeeProfile, EmployeeWorkload, TeamMember, TeamMembership};
use crate::inbound::http::ApiResult;
use crate::inbound::http::principal::Principal;
use crate::inbound::http::schemas::{EmployeeProfileSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id, required_text};

/// Employee to claim for the caller's team.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddEmployeeRequest {
    pub employee_id: Option<String>,
}

/// Stored membership.
#[derive(Debug, Serialize, ToSchema)]
pub struct AddEmployeeResponse {
    pub message: String,
    #[schema(value_type = Object)]
    pub membership: TeamMembership,
}

/// The caller's team.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeamResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub members: Vec<TeamMember>,
}

/// Every employee with their tasks.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub employees: Vec<EmployeeWorkload>,
}

/// Every registered employee.
#[utoipa::path(
    get,
    path = "/manager/employees",
    responses(
        (status = 200, description = "Employee profiles", body = Vec<EmployeeProfileSchema>),
        (status = 403, description = "Caller is not a manager", body = ErrorSchema)
    ),
    tags = ["team"],
    operation_id = "listEmployees"
)]
#[get("/manager/employees")]
pub async fn list_employees(
    state: web::Data<HttpState>,
    principal: Principal,
) -> ApiResult<web::Json<Vec<EmployeeProfile>>> {
    principal.require_manager()?;
    Ok(web::Json(state.team.list_employees().await?))
}

/// Claim an employee for the caller's team.
#[utoipa::path(
    post,
    path = "/manager/addEmployee",
    request_body = AddEmployeeRequest,
    responses(
        (status = 200, description = "Added", body = AddEmployeeResponse),
        (status = 400, description = "Employee ID missing", body = ErrorSchema),
        (status = 404, description = "Employee or manager not found", body = ErrorSchema),
        (status = 409, description = "Already in this team", body = ErrorSchema)
    ),
    tags = ["team"],
    operation_id = "addEmployee"
)]
#[post("/manager/addEmployee")]
pub async fn add_employee(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<AddEmployeeRequest>,
) -> ApiResult<web::Json<AddEmployeeResponse>> {
    principal.require_manager()?;
    let raw = required_text(
        payload.into_inner().employee_id,
        FieldName::new("employeeId"),
        "Employee ID is required",
    )?;
    let employee_id = parse_id(&raw, FieldName::new("employeeId"))?;
    let membership = state
        .team
        .add_team_member(principal.email(), employee_id)
        .await?;
    Ok(web::Json(AddEmployeeResponse {
        message: "Employee added successfully!".to_owned(),
        membership,
    }))
}

/// Members claimed by the caller.
#[utoipa::path(
    get,
    path = "/manager/team",
    responses(
        (status = 200, description = "Team members", body = TeamResponse),
        (status = 404, description = "Manager not found", body = ErrorSchema)
    ),
    tags = ["team"],
    operation_id = "team"
)]
#[get("/manager/team")]
pub async fn team(
    state: web::Data<HttpState>,
    principal: Principal,
) -> ApiResult<web::Json<TeamResponse>> {
    principal.require_manager()?;
    let members = state.team.team_members(principal.email()).await?;
    Ok(web::Json(TeamResponse {
        success: true,
        members,
    }))
}

/// Workload overview for the manager dashboard.
#[utoipa::path(
    get,
    path = "/manager/dashboard",
    responses(
        (status = 200, description = "Employees with tasks", body = DashboardResponse),
        (status = 403, description = "Caller is not a manager", body = ErrorSchema)
    ),
    tags = ["team"],
    operation_id = "dashboard"
)]
#[get("/manager/dashboard")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    principal: Principal,
) -> ApiResult<web::Json<DashboardResponse>> {
    principal.require_manager()?;
    let employees = state.team.team_overview().await?;
    Ok(web::Json(DashboardResponse {
        success: true,
        employees,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::{Value, json};

    use crate::inbound::http::test_utils::{
        as_manager, seed_employee, seed_manager, signed, test_app,
    };
    use crate::outbound::memory::InMemoryEntityStore;

    const BOSS: &str = "boss@corp.test";

    #[rstest]
    #[actix_web::test]
    async fn add_employee_persists_a_unique_membership() {
        let store = InMemoryEntityStore::new();
        seed_manager(&store, "Bo", BOSS).await;
        let ana = seed_employee(&store, "Ana", "ana@corp.test").await;
        let app = actix_test::init_service(test_app(&store)).await;
        let add = || {
            signed(actix_test::TestRequest::post(), as_manager(BOSS))
                .uri("/manager/addEmployee")
                .set_json(json!({"employeeId": ana.id}))
                .to_request()
        };

        let first = actix_test::call_service(&app, add()).await;
        assert_eq!(first.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(first).await;
        assert_eq!(body["message"], json!("Employee added successfully!"));
        assert_eq!(body["membership"]["employeeId"], json!(ana.id));

        let second = actix_test::call_service(&app, add()).await;
        assert_eq!(second.status(), StatusCode::CONFLICT);

        let members = actix_test::call_service(
            &app,
            signed(actix_test::TestRequest::get(), as_manager(BOSS))
                .uri("/manager/team")
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(members).await;
        assert_eq!(body["members"][0]["name"], json!("Ana"));
        assert_eq!(body["members"].as_array().map(Vec::len), Some(1));
    }

    #[rstest]
    #[case(json!({}), StatusCode::BAD_REQUEST)]
    #[case(json!({"employeeId": uuid::Uuid::nil()}), StatusCode::NOT_FOUND)]
    #[actix_web::test]
    async fn add_employee_failures(#[case] body: Value, #[case] status: StatusCode) {
        let store = InMemoryEntityStore::new();
        seed_manager(&store, "Bo", BOSS).await;
        let app = actix_test::init_service(test_app(&store)).await;

        let res = actix_test::call_service(
            &app,
            signed(actix_test::TestRequest::post(), as_manager(BOSS))
                .uri("/manager/addEmployee")
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), status);
    }

    #[rstest]
    #[actix_web::test]
    async fn employee_listing_and_dashboard() {
        let store = InMemoryEntityStore::new();
        seed_employee(&store, "Cy", "cy@corp.test").await;
        seed_employee(&store, "Ana", "ana@corp.test").await;
        let app = actix_test::init_service(test_app(&store)).await;

        let listed = actix_test::call_service(
            &app,
            signed(actix_test::TestRequest::get(), as_manager(BOSS))
                .uri("/manager/employees")
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(listed).await;
        let names: Vec<_> = body
            .as_array()
            .map(|rows| rows.iter().map(|row| row["name"].clone()).collect())
            .unwrap_or_default();
        assert_eq!(names, vec![json!("Ana"), json!("Cy")]);

        let overview = actix_test::call_service(
            &app,
            signed(actix_test::TestRequest::get(), as_manager(BOSS))
                .uri("/manager/dashboard")
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(overview).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["employees"][0]["tasks"], json!([]));
    }
}
