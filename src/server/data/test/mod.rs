mod book;
mod book_detail;
mod department;
mod publisher;
mod student;
mod student_detail;
mod user;
