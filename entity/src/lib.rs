pub mod prelude;

pub mod affair;
pub mod assignment;
pub mod attorney;
pub mod client;
