#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod form;
mod name;
mod navigation;
mod program;
mod row;
mod service;
mod unsaved;

pub use error::*;
pub use form::*;
pub use name::*;
pub use navigation::*;
pub use program::*;
pub use row::*;
pub use service::*;
pub use unsaved::*;
