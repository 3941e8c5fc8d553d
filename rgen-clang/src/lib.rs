pub mod error;
pub mod ty;

pub use ty::{Declaration, Type, TypeKind};
