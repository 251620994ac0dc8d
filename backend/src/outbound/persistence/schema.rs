//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Organisational roles.
    role (id) {
        /// Primary key, assigned by a `BIGSERIAL` sequence.
        id -> Int8,
        /// Role name (max 155 characters).
        name -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Employees. `name` carries a unique index.
    employee (id) {
        /// Primary key, assigned by a `BIGSERIAL` sequence.
        id -> Int8,
        /// Employee name (max 155 characters).
        name -> Varchar,
        /// Foreign key to `role.id`.
        role_id -> Int8,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(employee -> role (role_id));
diesel::allow_tables_to_appear_in_same_query!(employee, role);
