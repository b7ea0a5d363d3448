mod compare;
mod data_type;
mod encoding;
mod messages;
mod parsers;
mod type_mapper;
mod validator;
mod validators;

pub use compare::*;
pub use data_type::*;
pub use encoding::*;
pub use messages::*;
pub use parsers::*;
pub use type_mapper::*;
pub use validator::*;
pub use validators::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
