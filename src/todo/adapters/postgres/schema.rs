//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo records.
    todos (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Free-text label.
        #[max_length = 255]
        name -> Varchar,
        /// Lifecycle status; cleared when an update omits it.
        #[max_length = 50]
        status -> Nullable<Varchar>,
    }
}
