pub mod error;
pub mod file;
pub mod gen_rust;
pub mod rustfmt;
pub mod waiter;

pub use error::Error;
pub use file::File;
pub use waiter::GenerateWaiter;
