pub mod html;
pub mod summary;
