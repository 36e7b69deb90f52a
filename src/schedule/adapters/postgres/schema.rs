//! Diesel schema for preference persistence.

diesel::table! {
    /// Per-user scheduling preferences.
    user_preferences (user_id) {
        /// Owning user identifier.
        user_id -> Int8,
        /// Free-text user context handed to the generation backend.
        user_context -> Text,
        /// Preferred time slots, stored as a JSON array of slot labels.
        preferred_time_slots -> Jsonb,
    }
}
