//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with time-of-day scheduling metadata.
    tasks (id) {
        /// Task identifier (assigned by the database).
        id -> Int8,
        /// Owning user identifier.
        owner_id -> Int8,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional task description.
        description -> Nullable<Text>,
        /// Coarse time-of-day slot label.
        #[max_length = 20]
        time_slot -> Nullable<Varchar>,
        /// Specific scheduled time.
        specific_time -> Nullable<Timestamptz>,
        /// Duration in minutes.
        duration_minutes -> Nullable<Int4>,
        /// Referenced goal; nulled on goal deletion (`ON DELETE SET NULL`).
        goal_id -> Nullable<Int8>,
        /// Whether the task is fixed in time.
        fixed -> Bool,
        /// Completion flag.
        completed -> Bool,
        /// Whether the task was authored by the generation pipeline.
        ai_generated -> Bool,
        /// Whether the task passed pipeline validation before persistence.
        ai_validated -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
