mod author;
mod book;
mod message;

pub use self::{author::*, book::*, message::*};
