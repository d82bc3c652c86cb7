//! Progress display while queries are merged

pub mod reporter;
