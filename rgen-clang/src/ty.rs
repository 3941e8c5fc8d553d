use std::fmt::Display;

use rgen_util::Trace;
use tracing::trace;

use crate::error::Error;
type Result<T, E = Error> = std::result::Result<T, E>;

/// The kinds of clang type we know how to describe.
///
/// This mirrors `CXTypeKind` for the subset of the enumeration the
/// generator meets in practice. Kinds outside this set never make it into
/// a [`Type`] and are rejected at extraction time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Void,
    Bool,
    CharU,
    UChar,
    UShort,
    UInt,
    ULong,
    ULongLong,
    CharS,
    SChar,
    Short,
    Int,
    Long,
    LongLong,
    Float,
    Double,
    Complex,
    BlockPointer,
    Vector,
    Pointer,
    Record,
    Enum,
    Typedef,
    FunctionProto,
    ConstantArray,
    Elaborated,
    Unexposed,
}

impl TypeKind {
    pub fn spelling(&self) -> &'static str {
        match self {
            TypeKind::Void => "Void",
            TypeKind::Bool => "Bool",
            TypeKind::CharU => "Char_U",
            TypeKind::UChar => "UChar",
            TypeKind::UShort => "UShort",
            TypeKind::UInt => "UInt",
            TypeKind::ULong => "ULong",
            TypeKind::ULongLong => "ULongLong",
            TypeKind::CharS => "Char_S",
            TypeKind::SChar => "SChar",
            TypeKind::Short => "Short",
            TypeKind::Int => "Int",
            TypeKind::Long => "Long",
            TypeKind::LongLong => "LongLong",
            TypeKind::Float => "Float",
            TypeKind::Double => "Double",
            TypeKind::Complex => "Complex",
            TypeKind::BlockPointer => "BlockPointer",
            TypeKind::Vector => "Vector",
            TypeKind::Pointer => "Pointer",
            TypeKind::Record => "Record",
            TypeKind::Enum => "Enum",
            TypeKind::Typedef => "Typedef",
            TypeKind::FunctionProto => "FunctionProto",
            TypeKind::ConstantArray => "ConstantArray",
            TypeKind::Elaborated => "Elaborated",
            TypeKind::Unexposed => "Unexposed",
        }
    }
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

/// The declaration cursor behind a named type: the spelling of the
/// declared type and the cursor's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    type_spelling: String,
    display_name: String,
}

impl Declaration {
    pub fn new(type_spelling: &str, display_name: &str) -> Declaration {
        Declaration {
            type_spelling: type_spelling.to_string(),
            display_name: display_name.to_string(),
        }
    }

    /// Spelling of the declared type, e.g. `CXTranslationUnit`
    pub fn type_spelling(&self) -> &str {
        &self.type_spelling
    }

    /// Display name of the declaration cursor, e.g. `CXErrorCode`
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// One resolved clang type, owned rather than borrowed from a
/// translation unit.
///
/// The extraction layer snapshots everything the translator asks libclang
/// for: kind, spellings, the canonical type, the pointee, the array
/// element and size, and the declaration cursor. Sentinel values follow
/// libclang conventions (`array_size` is -1 for non-arrays).
#[derive(Debug, Clone)]
pub struct Type {
    kind: TypeKind,
    spelling: String,
    canonical: Option<Box<Type>>,
    pointee: Option<Box<Type>>,
    element: Option<Box<Type>>,
    array_size: i64,
    declaration: Option<Declaration>,
}

impl Type {
    fn new(kind: TypeKind, spelling: String) -> Type {
        trace!("new type descriptor {kind} \"{spelling}\"");
        Type {
            kind,
            spelling,
            canonical: None,
            pointee: None,
            element: None,
            array_size: -1,
            declaration: None,
        }
    }

    /// A builtin scalar such as `Int` or `Double`, spelt as in the source
    pub fn builtin(kind: TypeKind, spelling: &str) -> Type {
        Type::new(kind, spelling.to_string())
    }

    pub fn pointer(pointee: Type) -> Type {
        let mut ty = Type::new(TypeKind::Pointer, format!("{} *", pointee.spelling));
        ty.pointee = Some(Box::new(pointee));
        ty
    }

    pub fn constant_array(element: Type, size: i64) -> Type {
        let mut ty = Type::new(
            TypeKind::ConstantArray,
            format!("{}[{}]", element.spelling, size),
        );
        ty.element = Some(Box::new(element));
        ty.array_size = size;
        ty
    }

    pub fn typedef(spelling: &str, declaration: Declaration, canonical: Type) -> Type {
        let mut ty = Type::new(TypeKind::Typedef, spelling.to_string());
        ty.declaration = Some(declaration);
        ty.canonical = Some(Box::new(canonical));
        ty
    }

    pub fn record(declaration: Declaration) -> Type {
        let mut ty = Type::new(TypeKind::Record, declaration.type_spelling.clone());
        ty.declaration = Some(declaration);
        ty
    }

    pub fn enum_decl(declaration: Declaration) -> Type {
        let mut ty = Type::new(TypeKind::Enum, declaration.type_spelling.clone());
        ty.declaration = Some(declaration);
        ty
    }

    pub fn function_proto(declaration: Declaration) -> Type {
        let mut ty = Type::new(TypeKind::FunctionProto, declaration.type_spelling.clone());
        ty.declaration = Some(declaration);
        ty
    }

    /// An elaborated wrapper such as `struct Foo`, transparent over its
    /// canonical type
    pub fn elaborated(canonical: Type) -> Type {
        let mut ty = Type::new(TypeKind::Elaborated, canonical.spelling.clone());
        ty.canonical = Some(Box::new(canonical));
        ty
    }

    /// A type clang reports as `Unexposed` while still knowing its
    /// canonical form
    pub fn unexposed(canonical: Type) -> Type {
        let mut ty = Type::new(TypeKind::Unexposed, canonical.spelling.clone());
        ty.canonical = Some(Box::new(canonical));
        ty
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn spelling(&self) -> &str {
        &self.spelling
    }

    /// The canonical (fully sugar-free) type. A type with no recorded
    /// canonical form is its own canonical type.
    pub fn canonical_type(&self) -> &Type {
        match &self.canonical {
            Some(c) => c.canonical_type(),
            None => self,
        }
    }

    pub fn pointee_type(&self) -> Result<&Type> {
        self.pointee
            .as_deref()
            .ok_or_else(|| Error::NotAPointer {
                spelling: self.spelling.clone(),
                kind: self.kind,
                source: Trace::new(),
            })
    }

    pub fn array_element_type(&self) -> Result<&Type> {
        self.element
            .as_deref()
            .ok_or_else(|| Error::NotAnArray {
                spelling: self.spelling.clone(),
                kind: self.kind,
                source: Trace::new(),
            })
    }

    /// Number of elements for a constant array, -1 otherwise
    pub fn array_size(&self) -> i64 {
        self.array_size
    }

    pub fn declaration(&self) -> Result<&Declaration> {
        self.declaration
            .as_ref()
            .ok_or_else(|| Error::InvalidCursor {
                spelling: self.spelling.clone(),
                kind: self.kind,
                source: Trace::new(),
            })
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling)
    }
}
