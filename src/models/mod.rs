pub mod category;
pub mod contact_message;
pub mod course;
pub mod instructor;
pub mod serde_helpers;

pub use category::{Category, NewCategoryRequest, UpdateCategoryRequest};
pub use contact_message::{
    ContactMessage, MessageStats, MessageStatus, NewContactMessageRequest,
    UpdateContactMessageRequest,
};
pub use course::{Course, CourseModule, CourseView, NewCourseRequest, UpdateCourseRequest};
pub use instructor::{Instructor, InstructorView, NewInstructorRequest, UpdateInstructorRequest};
