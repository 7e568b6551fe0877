//! HTTP inbound adapter exposing the HR REST endpoints.

pub mod accounts;
pub mod attendance;
pub mod error;
pub mod health;
pub mod leaves;
pub mod principal;
pub mod reviews;
pub mod schemas;
pub mod state;
pub mod tasks;
pub mod team;
#[cfg(test)]
pub mod test_utils;
pub mod todos;
pub mod validation;
pub mod work_reports;

use actix_web::web;

pub use error::ApiResult;

/// Mount every HR endpoint on `cfg`.
///
/// Malformed JSON bodies are answered with the standard error envelope.
/// Health probes are mounted separately because they depend on server
/// lifecycle state.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(accounts::register_employee)
        .service(accounts::register_manager)
        .service(accounts::employee_login)
        .service(accounts::manager_login)
        .service(accounts::get_profile)
        .service(accounts::update_profile)
        .service(tasks::assign_task)
        .service(tasks::put_task_status)
        .service(tasks::manager_update_task_status)
        .service(tasks::get_tasks)
        .service(tasks::employee_update_task_status)
        .service(leaves::apply_leave)
        .service(leaves::get_leaves)
        .service(leaves::get_leave_requests)
        .service(leaves::update_leave_status)
        .service(work_reports::submit_work_report)
        .service(work_reports::get_work_reports)
        .service(work_reports::list_work_reports)
        .service(work_reports::update_report_status)
        .service(reviews::submit_review)
        .service(reviews::all_reviews)
        .service(reviews::update_review)
        .service(reviews::review_summary)
        .service(reviews::get_reviews)
        .service(attendance::get_attendance)
        .service(team::list_employees)
        .service(team::add_employee)
        .service(team::team)
        .service(team::dashboard)
        .service(todos::get_todos)
        .service(todos::add_todo)
        .service(todos::toggle_todo)
        .service(todos::delete_todo);
}
