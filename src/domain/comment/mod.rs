// Comment domain module

#![allow(clippy::module_inception)]

pub mod comment;

pub use comment::{Comment, CommentSnapshot, MAX_COMMENT_LENGTH};
