mod common;

use rgen_clang::ty::{Declaration, Type, TypeKind};
use rgen_translate::error::Error;
use rgen_translate::naming::{array_name_from_length, is_integer, trim_language_prefix};
use rgen_translate::rtype::{rust_type_from_clang, RustType, RUST_F32, RUST_POINTER, RUST_U32};

#[test]
fn test_resolve_scalars() -> Result<(), Error> {
    common::init_log();

    let ty = rust_type_from_clang(&Type::builtin(TypeKind::UInt, "unsigned int"))?;
    assert_eq!(ty.cname, "unsigned int");
    assert_eq!(ty.ffi_name, "c_uint");
    assert_eq!(ty.rust_name, "u32");
    assert_eq!(ty.pointer_level, 0);
    assert!(ty.is_primitive);

    let ty = rust_type_from_clang(&Type::builtin(TypeKind::Double, "double"))?;
    assert_eq!(ty.rust_name, "f64");

    let ty = rust_type_from_clang(&Type::builtin(TypeKind::Void, "void"))?;
    assert_eq!(ty.rust_name, "()");

    Ok(())
}

#[test]
fn test_resolve_pointer_to_pointer() -> Result<(), Error> {
    common::init_log();

    let base = Type::builtin(TypeKind::CharS, "char");
    let scalar = rust_type_from_clang(&base)?;

    let ty = rust_type_from_clang(&Type::pointer(Type::pointer(base)))?;
    assert_eq!(ty.pointer_level, 2);
    assert_eq!(ty.rust_name, scalar.rust_name);
    assert_eq!(ty.ffi_name, scalar.ffi_name);
    assert_eq!(ty.is_primitive, scalar.is_primitive);

    Ok(())
}

#[test]
fn test_resolve_pointer_to_record() -> Result<(), Error> {
    common::init_log();

    let record = Type::record(Declaration::new("CXCursorSetImpl", "CXCursorSetImpl"));
    let ty = rust_type_from_clang(&Type::pointer(record))?;

    assert_eq!(ty.pointer_level, 1);
    assert_eq!(ty.rust_name, "CursorSetImpl");
    assert!(!ty.is_primitive);
    assert!(!ty.is_function_pointer);

    Ok(())
}

#[test]
fn test_resolve_constant_array() -> Result<(), Error> {
    common::init_log();

    let element = Type::builtin(TypeKind::Float, "float");
    let alone = rust_type_from_clang(&element)?;

    let ty = rust_type_from_clang(&Type::constant_array(element, 4))?;
    assert!(ty.is_array);
    assert_eq!(ty.array_size, 4);
    assert_eq!(ty.rust_name, alone.rust_name);
    assert_eq!(ty.ffi_name, alone.ffi_name);
    assert_eq!(ty.pointer_level, alone.pointer_level);

    // arrays are never conflated with pointers
    assert_eq!(ty.pointer_level, 0);

    Ok(())
}

#[test]
fn test_resolve_array_of_pointers() -> Result<(), Error> {
    common::init_log();

    let element = Type::pointer(Type::builtin(TypeKind::CharS, "char"));
    let ty = rust_type_from_clang(&Type::constant_array(element, 8))?;

    assert!(ty.is_array);
    assert_eq!(ty.array_size, 8);
    assert_eq!(ty.pointer_level, 1);

    Ok(())
}

#[test]
fn test_resolve_typedef_string_handle() -> Result<(), Error> {
    common::init_log();

    let decl = Declaration::new("CXString", "CXString");
    let canonical = Type::record(decl.clone());
    let ty = rust_type_from_clang(&Type::typedef("CXString", decl, canonical))?;

    assert_eq!(ty.rust_name, "cxstring");
    assert_eq!(ty.ffi_name, "CXString");
    assert!(!ty.is_primitive);

    Ok(())
}

#[test]
fn test_resolve_typedef_time() -> Result<(), Error> {
    common::init_log();

    let decl = Declaration::new("time_t", "time_t");
    let canonical = Type::builtin(TypeKind::Long, "long");
    let ty = rust_type_from_clang(&Type::typedef("time_t", decl, canonical))?;

    assert_eq!(ty.rust_name, "SystemTime");
    assert_eq!(ty.ffi_name, "time_t");
    assert!(ty.is_primitive);

    Ok(())
}

#[test]
fn test_resolve_typedef_of_enum() -> Result<(), Error> {
    common::init_log();

    let decl = Declaration::new("CXErrorCode", "CXErrorCode");
    let canonical = Type::enum_decl(decl.clone());
    let ty = rust_type_from_clang(&Type::typedef("CXErrorCode", decl, canonical))?;

    assert_eq!(ty.rust_name, "ErrorCode");
    assert!(ty.is_enum_literal);
    assert!(ty.is_primitive);

    Ok(())
}

#[test]
fn test_resolve_enum() -> Result<(), Error> {
    common::init_log();

    let ty = rust_type_from_clang(&Type::enum_decl(Declaration::new(
        "CXCursorKind",
        "CXCursorKind",
    )))?;

    assert_eq!(ty.rust_name, "CursorKind");
    assert!(ty.is_enum_literal);
    assert!(ty.is_primitive);

    Ok(())
}

#[test]
fn test_resolve_function_pointer() -> Result<(), Error> {
    common::init_log();

    let proto = Type::function_proto(Declaration::new("CXCursorVisitor", "CXCursorVisitor"));
    let ty = rust_type_from_clang(&Type::pointer(proto))?;

    assert!(ty.is_function_pointer);
    assert_eq!(ty.pointer_level, 1);
    assert_eq!(ty.rust_name, "CursorVisitor");

    Ok(())
}

#[test]
fn test_resolve_elaborated_is_transparent() -> Result<(), Error> {
    common::init_log();

    let decl = Declaration::new("CXSourceLocation", "CXSourceLocation");
    let plain = rust_type_from_clang(&Type::record(decl.clone()))?;
    let wrapped = rust_type_from_clang(&Type::elaborated(Type::record(decl)))?;

    assert_eq!(wrapped, plain);
    assert_eq!(wrapped.pointer_level, 0);
    assert!(!wrapped.is_array);

    Ok(())
}

#[test]
fn test_resolve_unexposed_enum_workaround() -> Result<(), Error> {
    common::init_log();

    // clang sometimes reports enums as Unexposed; the canonical type must
    // shine through unchanged
    let decl = Declaration::new("CXAvailabilityKind", "CXAvailabilityKind");
    let ty = rust_type_from_clang(&Type::unexposed(Type::enum_decl(decl)))?;

    assert_eq!(ty.rust_name, "AvailabilityKind");
    assert!(ty.is_enum_literal);
    assert!(ty.is_primitive);

    Ok(())
}

#[test]
fn test_resolve_unhandled_kind_fails() {
    common::init_log();

    let res = rust_type_from_clang(&Type::builtin(TypeKind::Complex, "_Complex float"));

    match res {
        Err(Error::UnhandledTypeKind { spelling, kind, .. }) => {
            assert_eq!(spelling, "_Complex float");
            assert_eq!(kind, TypeKind::Complex);
        }
        other => panic!("expected UnhandledTypeKind, got {other:?}"),
    }
}

#[test]
fn test_trim_language_prefix() {
    assert_eq!(trim_language_prefix("CXTranslationUnit"), "TranslationUnit");
    assert_eq!(trim_language_prefix("CX_CXXAccessSpecifier"), "CXXAccessSpecifier");
    assert_eq!(trim_language_prefix("time_t"), "time_t");
}

#[test]
fn test_array_name_from_length_rules_in_order() {
    // first-match-wins: `num_` must win over the bare `num` prefix
    assert_eq!(array_name_from_length("num_tokens"), "tokens");
    assert_eq!(array_name_from_length("numfields"), "fields");
    assert_eq!(array_name_from_length("buffer_size"), "buffer");
    assert_eq!(array_name_from_length("NumTokens"), "Tokens");

    // `Num` only strips before an uppercase letter
    assert_eq!(array_name_from_length("Number"), "");
    assert_eq!(array_name_from_length("foo"), "");
}

#[test]
fn test_is_integer() -> Result<(), Error> {
    common::init_log();

    for kind in [
        TypeKind::CharS,
        TypeKind::UChar,
        TypeKind::Short,
        TypeKind::UShort,
        TypeKind::Int,
        TypeKind::UInt,
        TypeKind::Long,
        TypeKind::ULong,
        TypeKind::LongLong,
        TypeKind::ULongLong,
    ] {
        let ty = rust_type_from_clang(&Type::builtin(kind, "n"))?;
        assert!(is_integer(&ty), "{kind} should resolve to an integer");
    }

    let ty = rust_type_from_clang(&Type::builtin(TypeKind::Bool, "bool"))?;
    assert!(!is_integer(&ty));

    let ty = RustType {
        rust_name: RUST_F32.to_string(),
        ..Default::default()
    };
    assert!(!is_integer(&ty));

    let ty = RustType {
        rust_name: RUST_POINTER.to_string(),
        ..Default::default()
    };
    assert!(!is_integer(&ty));

    let ty = rust_type_from_clang(&Type::record(Declaration::new("CXIndex", "CXIndex")))?;
    assert!(!is_integer(&ty));

    // sanity: the positive set really is the eight fixed-width names
    let ty = RustType {
        rust_name: RUST_U32.to_string(),
        ..Default::default()
    };
    assert!(is_integer(&ty));

    Ok(())
}
