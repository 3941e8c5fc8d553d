use rgen_clang::ty::TypeKind;
use rgen_util::Trace;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unhandled type \"{spelling}\" of kind \"{kind}\"")]
    UnhandledTypeKind {
        spelling: String,
        kind: TypeKind,
        source: Trace,
    },
    #[error("clang descriptor error")]
    Clang(#[from] rgen_clang::error::Error),
}
