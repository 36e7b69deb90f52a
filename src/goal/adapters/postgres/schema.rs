//! Diesel schema for goal persistence.

diesel::table! {
    /// Goal records owned by a single user.
    goals (id) {
        /// Goal identifier (assigned by the database).
        id -> Int8,
        /// Owning user identifier.
        owner_id -> Int8,
        /// Goal title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional goal description.
        description -> Nullable<Text>,
    }
}
