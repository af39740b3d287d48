//! Compare the same calendar day of daily notes across years.
//!
//! [`diary`] turns a set of note files into a dense year x date table and
//! [`excerpt`] pulls the summary section out of a single note. [`view`]
//! combines them into a table whose cells are filled asynchronously.

pub mod config;
pub mod diary;
pub mod excerpt;
pub mod render;
pub mod vault;
pub mod view;
