mod author;
mod book;
mod common;

pub use self::{author::*, book::*, common::*};
