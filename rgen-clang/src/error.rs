use rgen_util::Trace;

use crate::ty::TypeKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("type \"{spelling}\" of kind \"{kind}\" has no pointee")]
    NotAPointer {
        spelling: String,
        kind: TypeKind,
        source: Trace,
    },
    #[error("type \"{spelling}\" of kind \"{kind}\" is not an array")]
    NotAnArray {
        spelling: String,
        kind: TypeKind,
        source: Trace,
    },
    #[error("type \"{spelling}\" of kind \"{kind}\" has no declaration cursor")]
    InvalidCursor {
        spelling: String,
        kind: TypeKind,
        source: Trace,
    },
}
