use rgen_clang::ty::{Type, TypeKind};
use rgen_util::Trace;
use tracing::instrument;

use crate::error::Error;
use crate::naming::trim_language_prefix;
type Result<T, E = Error> = std::result::Result<T, E>;

// The Rust-side names a foreign type can resolve to.
pub const RUST_I8: &str = "i8";
pub const RUST_U8: &str = "u8";
pub const RUST_I16: &str = "i16";
pub const RUST_U16: &str = "u16";
pub const RUST_I32: &str = "i32";
pub const RUST_U32: &str = "u32";
pub const RUST_I64: &str = "i64";
pub const RUST_U64: &str = "u64";
pub const RUST_F32: &str = "f32";
pub const RUST_F64: &str = "f64";
pub const RUST_BOOL: &str = "bool";
/// Placeholder for `void`, which has no Rust value representation and is
/// only valid as a bare function return
pub const RUST_UNIT: &str = "()";
pub const RUST_POINTER: &str = "*mut c_void";

// The ffi bridge names, as spelt in std::os::raw.
pub const FFI_SCHAR: &str = "c_schar";
pub const FFI_UCHAR: &str = "c_uchar";
pub const FFI_SHORT: &str = "c_short";
pub const FFI_USHORT: &str = "c_ushort";
pub const FFI_INT: &str = "c_int";
pub const FFI_UINT: &str = "c_uint";
pub const FFI_LONG: &str = "c_long";
pub const FFI_ULONG: &str = "c_ulong";
pub const FFI_LONGLONG: &str = "c_longlong";
pub const FFI_ULONGLONG: &str = "c_ulonglong";
pub const FFI_FLOAT: &str = "c_float";
pub const FFI_DOUBLE: &str = "c_double";
pub const FFI_VOID: &str = "c_void";

/// The resolved description of one foreign type.
///
/// `pointer_level` counts every layer of indirection met during descent,
/// so a `T**` resolves to level 2. `array_size` is only meaningful when
/// `is_array` is set and stays at the -1 sentinel otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RustType {
    /// Foreign spelling, e.g. `CXIndex`
    pub cname: String,
    /// Name at the ffi bridge layer, e.g. `c_uint`
    pub ffi_name: String,
    /// Name in the generated Rust, e.g. `u32`
    pub rust_name: String,

    /// Sibling length field when this type is a sized buffer
    pub length_of_slice: Option<String>,

    pub array_size: i64,
    pub pointer_level: usize,

    pub is_primitive: bool,
    pub is_array: bool,
    pub is_enum_literal: bool,
    pub is_function_pointer: bool,
    pub is_return_argument: bool,
    pub is_slice: bool,
    pub is_pointer_composition: bool,
    pub is_bit_field: bool,
}

impl Default for RustType {
    fn default() -> Self {
        RustType {
            cname: String::new(),
            ffi_name: String::new(),
            rust_name: String::new(),
            length_of_slice: None,
            array_size: -1,
            pointer_level: 0,
            is_primitive: true,
            is_array: false,
            is_enum_literal: false,
            is_function_pointer: false,
            is_return_argument: false,
            is_slice: false,
            is_pointer_composition: false,
            is_bit_field: false,
        }
    }
}

/// Resolve one clang type descriptor to its [`RustType`].
///
/// The match is exhaustive over [`TypeKind`]; kinds the generator has no
/// mapping for fail with [`Error::UnhandledTypeKind`] rather than
/// producing a half-filled record.
#[instrument(level = "trace")]
pub fn rust_type_from_clang(ty: &Type) -> Result<RustType> {
    let mut rt = RustType {
        cname: ty.spelling().to_string(),
        ..Default::default()
    };

    match ty.kind() {
        TypeKind::CharS | TypeKind::SChar => {
            rt.ffi_name = FFI_SCHAR.to_string();
            rt.rust_name = RUST_I8.to_string();
        }

        TypeKind::CharU | TypeKind::UChar => {
            rt.ffi_name = FFI_UCHAR.to_string();
            rt.rust_name = RUST_U8.to_string();
        }

        TypeKind::Short => {
            rt.ffi_name = FFI_SHORT.to_string();
            rt.rust_name = RUST_I16.to_string();
        }

        TypeKind::UShort => {
            rt.ffi_name = FFI_USHORT.to_string();
            rt.rust_name = RUST_U16.to_string();
        }

        TypeKind::Int => {
            rt.ffi_name = FFI_INT.to_string();
            rt.rust_name = RUST_I32.to_string();
        }

        TypeKind::UInt => {
            rt.ffi_name = FFI_UINT.to_string();
            rt.rust_name = RUST_U32.to_string();
        }

        TypeKind::Long => {
            rt.ffi_name = FFI_LONG.to_string();
            rt.rust_name = RUST_I64.to_string();
        }

        TypeKind::ULong => {
            rt.ffi_name = FFI_ULONG.to_string();
            rt.rust_name = RUST_U64.to_string();
        }

        TypeKind::LongLong => {
            rt.ffi_name = FFI_LONGLONG.to_string();
            rt.rust_name = RUST_I64.to_string();
        }

        TypeKind::ULongLong => {
            rt.ffi_name = FFI_ULONGLONG.to_string();
            rt.rust_name = RUST_U64.to_string();
        }

        TypeKind::Float => {
            rt.ffi_name = FFI_FLOAT.to_string();
            rt.rust_name = RUST_F32.to_string();
        }

        TypeKind::Double => {
            rt.ffi_name = FFI_DOUBLE.to_string();
            rt.rust_name = RUST_F64.to_string();
        }

        TypeKind::Bool => {
            rt.rust_name = RUST_BOOL.to_string();
        }

        TypeKind::Void => {
            rt.ffi_name = FFI_VOID.to_string();
            rt.rust_name = RUST_UNIT.to_string();
        }

        TypeKind::ConstantArray => {
            let sub = rust_type_from_clang(ty.array_element_type()?)?;

            rt.ffi_name = sub.ffi_name;
            rt.rust_name = sub.rust_name;
            rt.pointer_level += sub.pointer_level;
            rt.is_array = true;
            rt.array_size = ty.array_size();
        }

        TypeKind::Typedef => {
            rt.is_primitive = false;
            rt.ffi_name = ty.declaration()?.type_spelling().to_string();

            rt.rust_name = match ty.spelling() {
                // the opaque string handle keeps its own wrapper type
                "CXString" => "cxstring".to_string(),

                "time_t" => {
                    rt.is_primitive = true;
                    "SystemTime".to_string()
                }

                _ => trim_language_prefix(ty.declaration()?.type_spelling()),
            };

            if ty.canonical_type().kind() == TypeKind::Enum {
                rt.is_enum_literal = true;
                rt.is_primitive = true;
            }
        }

        TypeKind::Pointer => {
            rt.pointer_level += 1;

            if ty.pointee_type()?.canonical_type().kind() == TypeKind::FunctionProto {
                rt.is_function_pointer = true;
            }

            let sub = rust_type_from_clang(ty.pointee_type()?)?;

            rt.ffi_name = sub.ffi_name;
            rt.rust_name = sub.rust_name;
            rt.pointer_level += sub.pointer_level;
            rt.is_primitive = sub.is_primitive;
        }

        TypeKind::Record => {
            rt.ffi_name = ty.declaration()?.type_spelling().to_string();
            rt.rust_name = trim_language_prefix(&rt.ffi_name);
            rt.is_primitive = false;
        }

        TypeKind::FunctionProto => {
            rt.is_function_pointer = true;
            rt.ffi_name = ty.declaration()?.type_spelling().to_string();
            rt.rust_name = trim_language_prefix(&rt.ffi_name);
        }

        TypeKind::Enum => {
            rt.rust_name = trim_language_prefix(ty.declaration()?.display_name());
            rt.is_enum_literal = true;
            rt.is_primitive = true;
        }

        TypeKind::Elaborated => {
            return rust_type_from_clang(ty.canonical_type());
        }

        // clang has reported enum types under Unexposed since 2013
        // (llvm.org/bugs/show_bug.cgi?id=15089), so treat it as a
        // transparent alias for the canonical type
        TypeKind::Unexposed => {
            return rust_type_from_clang(ty.canonical_type());
        }

        TypeKind::Complex | TypeKind::BlockPointer | TypeKind::Vector => {
            return Err(Error::UnhandledTypeKind {
                spelling: ty.spelling().to_string(),
                kind: ty.kind(),
                source: Trace::new(),
            });
        }
    }

    Ok(rt)
}
