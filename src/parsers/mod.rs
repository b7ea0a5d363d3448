mod boolean;
mod datetime;
mod numeric;

pub use boolean::*;
pub use datetime::*;
pub use numeric::*;
