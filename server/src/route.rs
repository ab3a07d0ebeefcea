mod author;
mod book;
mod root;

pub use self::{author::*, book::*, root::*};
