//! Command implementations.

pub mod groups;
pub mod guide;
pub mod query;
pub mod schema;
pub mod show;
pub mod summary;

pub use self::groups::execute_groups;
pub use self::guide::execute_guide;
pub use self::query::execute_query;
pub use self::schema::execute_schema;
pub use self::show::execute_show;
pub use self::summary::execute_summary;
