pub mod dashboard;
pub mod dispatch;
pub mod notes;
pub mod profile;
pub mod report;
pub mod risk;
pub mod schema;
pub mod serve;
pub mod student;
pub mod students;
pub mod tables;
