//! Registration, login and employee profile handlers.
//!
//! ```text
//! POST /employee/register       POST /manager/register
//! POST /employee/login          POST /manager/login
//! POST /employee/getProfile     POST /employee/updateProfile
//! ```
//!
//! Registration and login are the only endpoints that do not require a
//! verified principal.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    AuthenticatedUser, ContactDetails, CredentialValidationError, EmployeeProfile, Error,
    LoginCredentials, ProfileUpdate, Registration, Role,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::principal::Principal;
use crate::inbound::http::schemas::{EmployeeProfileSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, required_text};

const ALL_FIELDS: &str = "All fields are required";
const EMAIL_REQUIRED: &str = "Email is required";

/// Registration payload for either role table.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Must equal the table's role (`Employee` or `Manager`).
    pub role: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
}

/// Login payload.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Payload naming the acting employee.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub email: Option<String>,
}

/// Partial profile edit.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
}

/// Plain acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Identity returned by a successful login.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    #[schema(value_type = Object)]
    pub user: AuthenticatedUser,
}

/// Profile lookup or update result.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[schema(value_type = EmployeeProfileSchema)]
    pub profile: EmployeeProfile,
}

fn map_credential_error(err: CredentialValidationError) -> Error {
    match err {
        CredentialValidationError::UnknownRole => Error::invalid_request("Unknown role"),
        CredentialValidationError::EmptyEmail
        | CredentialValidationError::EmptyPassword
        | CredentialValidationError::EmptyName => Error::invalid_request(ALL_FIELDS),
    }
}

fn parse_registration(table: Role, payload: RegisterRequest) -> Result<Registration, Error> {
    let name = required_text(payload.name, FieldName::new("name"), ALL_FIELDS)?;
    let email = required_text(payload.email, FieldName::new("email"), ALL_FIELDS)?;
    let password = required_text(payload.password, FieldName::new("password"), ALL_FIELDS)?;
    let raw_role = required_text(payload.role, FieldName::new("role"), ALL_FIELDS)?;
    let role = raw_role
        .parse::<Role>()
        .ok()
        .filter(|role| *role == table)
        .ok_or_else(|| Error::forbidden(format!("Only {table}s can be registered here")))?;

    let credentials =
        LoginCredentials::try_from_parts(&email, &password).map_err(map_credential_error)?;
    let contact = match table {
        Role::Employee => ContactDetails {
            phone: payload.phone,
            address: payload.address,
            department: payload.department,
        },
        Role::Manager => ContactDetails::default(),
    };
    Registration::try_new(&name, credentials, role, contact).map_err(map_credential_error)
}

fn parse_login(payload: LoginRequest) -> Result<LoginCredentials, Error> {
    let email = required_text(payload.email, FieldName::new("email"), ALL_FIELDS)?;
    let password = required_text(payload.password, FieldName::new("password"), ALL_FIELDS)?;
    LoginCredentials::try_from_parts(&email, &password).map_err(map_credential_error)
}

async fn register(
    state: &HttpState,
    table: Role,
    payload: RegisterRequest,
) -> ApiResult<web::Json<MessageResponse>> {
    let registration = parse_registration(table, payload)?;
    state.accounts.register(table, registration).await?;
    Ok(web::Json(MessageResponse {
        message: format!("{table} registered successfully"),
    }))
}

async fn login(
    state: &HttpState,
    table: Role,
    payload: LoginRequest,
) -> ApiResult<web::Json<LoginResponse>> {
    let credentials = parse_login(payload)?;
    let user = state.accounts.login(table, credentials).await?;
    Ok(web::Json(LoginResponse {
        message: "Login successful".to_owned(),
        user,
    }))
}

/// Register an employee.
#[utoipa::path(
    post,
    path = "/employee/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registered", body = MessageResponse),
        (status = 400, description = "Missing fields", body = ErrorSchema),
        (status = 403, description = "Role is not Employee", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "registerEmployee"
)]
#[post("/employee/register")]
pub async fn register_employee(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    register(&state, Role::Employee, payload.into_inner()).await
}

/// Register a manager.
#[utoipa::path(
    post,
    path = "/manager/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registered", body = MessageResponse),
        (status = 400, description = "Missing fields", body = ErrorSchema),
        (status = 403, description = "Role is not Manager", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "registerManager"
)]
#[post("/manager/register")]
pub async fn register_manager(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    register(&state, Role::Manager, payload.into_inner()).await
}

/// Employee login.
#[utoipa::path(
    post,
    path = "/employee/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "employeeLogin"
)]
#[post("/employee/login")]
pub async fn employee_login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    login(&state, Role::Employee, payload.into_inner()).await
}

/// Manager login.
#[utoipa::path(
    post,
    path = "/manager/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 404, description = "Manager not found", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "managerLogin"
)]
#[post("/manager/login")]
pub async fn manager_login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    login(&state, Role::Manager, payload.into_inner()).await
}

/// Fetch the caller's profile.
#[utoipa::path(
    post,
    path = "/employee/getProfile",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Profile", body = ProfileResponse),
        (status = 403, description = "Not the caller's email", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "getProfile"
)]
#[post("/employee/getProfile")]
pub async fn get_profile(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<EmailRequest>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let email = required_text(payload.into_inner().email, FieldName::new("email"), EMAIL_REQUIRED)?;
    principal.require_employee(&email)?;
    let profile = state.accounts.profile(&email).await?;
    Ok(web::Json(ProfileResponse {
        success: true,
        message: None,
        profile,
    }))
}

/// Edit the caller's profile.
#[utoipa::path(
    post,
    path = "/employee/updateProfile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
        (status = 403, description = "Not the caller's email", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema)
    ),
    tags = ["accounts"],
    operation_id = "updateProfile"
)]
#[post("/employee/updateProfile")]
pub async fn update_profile(
    state: web::Data<HttpState>,
    principal: Principal,
    payload: web::Json<UpdateProfileRequest>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let UpdateProfileRequest {
        email,
        name,
        phone,
        address,
        department,
    } = payload.into_inner();
    let email = required_text(email, FieldName::new("email"), EMAIL_REQUIRED)?;
    principal.require_employee(&email)?;
    let update = ProfileUpdate {
        name,
        phone,
        address,
        department,
    };
    let profile = state.accounts.update_profile(&email, update).await?;
    Ok(web::Json(ProfileResponse {
        success: true,
        message: Some("Profile updated successfully".to_owned()),
        profile,
    }))
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
