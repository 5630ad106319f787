pub mod generated;
pub mod resume;
