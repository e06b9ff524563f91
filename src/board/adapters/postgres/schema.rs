//! Diesel schema for board persistence.

diesel::table! {
    /// Task records owned by a single user.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user identifier.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form task description.
        description -> Text,
        /// Expected deliverable.
        #[max_length = 255]
        output -> Varchar,
        /// Lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Deadline for the task.
        deadline -> Timestamptz,
        /// Estimated effort in minutes (0-255).
        estimated_effort -> SmallInt,
        /// Whether the task is flagged for today.
        is_today_task -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only activity records, cascade-deleted with their task.
    activities (id) {
        /// Activity identifier.
        id -> Uuid,
        /// Owning task identifier.
        task_id -> Uuid,
        /// Event kind.
        #[max_length = 50]
        kind -> Varchar,
        /// Event timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(activities -> tasks (task_id));
diesel::allow_tables_to_appear_in_same_query!(activities, tasks);
