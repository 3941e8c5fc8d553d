pub mod error;
pub mod imports;
pub mod naming;
pub mod renum;
pub mod rfunction;
pub mod rstruct;
pub mod rtype;

pub use error::Error;
pub use imports::Imports;
pub use naming::{array_name_from_length, is_integer, trim_language_prefix};
pub use renum::{Enum, EnumItem};
pub use rfunction::Function;
pub use rstruct::Struct;
pub use rtype::{rust_type_from_clang, RustType};
