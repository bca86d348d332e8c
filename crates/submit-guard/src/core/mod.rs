pub mod count;
pub mod form;
pub mod guard;
pub mod limits;
