use std::fmt::Write;

use rgen_translate::{Enum, Function, Struct};

use crate::error::Error;
use crate::file::File;
type Result<T, E = Error> = std::result::Result<T, E>;

/// Render one output unit to Rust source.
///
/// Layout is fixed: generated-file header, import block, function
/// declarations, enum blocks, struct blocks. The import block ends with
/// the `crate::ffi` bridge module every generated file relies on.
pub fn render_file(file: &File) -> Result<String> {
    let mut src = String::new();

    writeln!(src, "// Code generated by rgen; DO NOT EDIT.")?;
    writeln!(src)?;

    for path in file.imports.iter() {
        writeln!(src, "use {path};")?;
    }
    writeln!(src, "use crate::ffi;")?;
    writeln!(src)?;

    for fun in &file.functions {
        render_function(&mut src, fun)?;
    }

    for enm in &file.enums {
        render_enum(&mut src, enm)?;
    }

    for st in &file.structs {
        render_struct(&mut src, st)?;
    }

    Ok(src)
}

fn render_function(src: &mut String, fun: &Function) -> Result<()> {
    writeln!(src, "{}", fun.body)?;
    writeln!(src)?;

    Ok(())
}

/// An enum becomes a named alias of its backing storage type plus one
/// constant binding per enumerator to its foreign value
fn render_enum(src: &mut String, enm: &Enum) -> Result<()> {
    if !enm.comment.is_empty() {
        writeln!(src, "{}", enm.comment)?;
    }
    writeln!(src, "pub type {} = {};", enm.name, enm.underlying_type)?;
    writeln!(src)?;

    for item in &enm.items {
        if !item.comment.is_empty() {
            writeln!(src, "{}", item.comment)?;
        }
        writeln!(
            src,
            "pub const {}: {} = ffi::{} as {};",
            item.name, enm.name, item.cname, enm.name
        )?;
    }
    writeln!(src)?;

    for fun in &enm.methods {
        render_function(src, fun)?;
    }

    Ok(())
}

fn render_struct(src: &mut String, st: &Struct) -> Result<()> {
    if !st.comment.is_empty() {
        writeln!(src, "{}", st.comment)?;
    }
    writeln!(src, "pub struct {} {{", st.name)?;
    if st.is_pointer_composition {
        writeln!(src, "    pub(crate) raw: *mut ffi::{},", st.cname)?;
    } else {
        writeln!(src, "    pub(crate) raw: ffi::{},", st.cname)?;
    }
    writeln!(src, "}}")?;
    writeln!(src)?;

    for fun in &st.methods {
        render_function(src, fun)?;
    }

    Ok(())
}
