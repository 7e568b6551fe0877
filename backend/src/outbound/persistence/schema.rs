//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are used
//! by Diesel for compile-time query validation and type-safe SQL generation.
//!
//! # Maintenance
//!
//! When migrations change the schema, this file should be regenerated or
//! manually updated to reflect those changes. The `diesel print-schema`
//! command can generate these definitions from a live database.

diesel::table! {
    /// Employee role table. `email` is unique.
    employees (id) {
        id -> Uuid,
        name -> Text,
        email -> Text,
        password_hash -> Text,
        phone -> Nullable<Text>,
        address -> Nullable<Text>,
        department -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Manager role table. `email` is unique.
    managers (id) {
        id -> Uuid,
        name -> Text,
        email -> Text,
        password_hash -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Manager claims on employees; the composite key forbids repeats.
    team_memberships (manager_id, employee_id) {
        manager_id -> Uuid,
        employee_id -> Uuid,
        added_at -> Timestamptz,
    }
}

diesel::table! {
    /// Assigned tasks.
    tasks (id) {
        id -> Uuid,
        employee_id -> Uuid,
        title -> Text,
        description -> Text,
        deadline -> Timestamptz,
        status -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        /// Optimistic concurrency counter, starting at 1.
        revision -> Int4,
    }
}

diesel::table! {
    /// Leave requests. `employee_id` is null when the email did not resolve.
    leave_requests (id) {
        id -> Uuid,
        employee_id -> Nullable<Uuid>,
        employee_email -> Text,
        start_date -> Date,
        end_date -> Date,
        reason -> Text,
        status -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        revision -> Int4,
    }
}

diesel::table! {
    /// Work reports. A check constraint enforces `start_date <= end_date`.
    work_reports (id) {
        id -> Uuid,
        employee_email -> Text,
        start_date -> Date,
        end_date -> Date,
        total_hours -> Float8,
        report_name -> Text,
        description -> Text,
        status -> Text,
        manager_comment -> Text,
        submitted_at -> Timestamptz,
        updated_at -> Timestamptz,
        revision -> Int4,
    }
}

diesel::table! {
    /// Performance reviews.
    reviews (id) {
        id -> Uuid,
        employee_id -> Uuid,
        review_text -> Text,
        rating -> Float8,
        tasks_completed -> Int4,
        average_rating -> Nullable<Float8>,
        remarks -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
        revision -> Int4,
    }
}

diesel::table! {
    /// Monthly attendance sheets; `records` holds `[{date, status}]`.
    attendance_sheets (employee_id, month) {
        employee_id -> Uuid,
        month -> Text,
        records -> Jsonb,
    }
}

diesel::table! {
    /// Personal to-do items.
    todos (id) {
        id -> Uuid,
        employee_email -> Text,
        text -> Text,
        completed -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    employees,
    managers,
    team_memberships,
    tasks,
    leave_requests,
    work_reports,
    reviews,
    attendance_sheets,
    todos,
);
