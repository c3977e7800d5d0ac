mod advisory;
mod policy;
mod request;

pub use advisory::*;
pub use policy::*;
pub use request::*;
