pub mod handlers;
mod layout;
pub mod page;
