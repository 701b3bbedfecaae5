pub mod common;
pub mod index;
pub mod layout;
pub mod submission_form;
