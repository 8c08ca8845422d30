pub mod admin;
pub mod assignment_submission;
pub mod course;
pub mod enrollment;
pub mod user;

pub use admin::Entity as Admin;
pub use assignment_submission::Entity as AssignmentSubmission;
pub use course::Entity as Course;
pub use enrollment::Entity as Enrollment;
pub use user::Entity as User;
