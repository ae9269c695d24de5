pub use super::book::Entity as Book;
pub use super::book_detail::Entity as BookDetail;
pub use super::department::Entity as Department;
pub use super::publisher::Entity as Publisher;
pub use super::student::Entity as Student;
pub use super::student_detail::Entity as StudentDetail;
pub use super::user::Entity as User;
