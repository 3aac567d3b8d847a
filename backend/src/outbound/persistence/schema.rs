//! Diesel table definitions; must match `backend/migrations`.

diesel::table! {
    /// Sample catalogue entries.
    books (id) {
        id -> Int8,
        title -> Varchar,
        author -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Application accounts. `email` is unique and stored lower-cased.
    users (id) {
        id -> Int8,
        name -> Varchar,
        email -> Varchar,
        password_hash -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(books, users);
