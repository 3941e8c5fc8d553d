use crate::imports::Imports;
use crate::rfunction::Function;

/// One enumerator, bound by name to its foreign constant.
#[derive(Debug, Clone)]
pub struct EnumItem {
    pub comment: String,
    pub name: String,
    pub cname: String,
}

impl EnumItem {
    pub fn new(name: &str, cname: &str) -> EnumItem {
        EnumItem {
            comment: String::new(),
            name: name.to_string(),
            cname: cname.to_string(),
        }
    }
}

/// A translated enum: a named alias of its backing storage type plus one
/// constant per enumerator, with any wrapped methods.
#[derive(Debug, Clone)]
pub struct Enum {
    pub comment: String,
    pub name: String,
    /// Rust name of the backing storage type, e.g. `u32`
    pub underlying_type: String,
    pub items: Vec<EnumItem>,
    pub methods: Vec<Function>,
    pub imports: Imports,
}

impl Enum {
    pub fn new(name: &str, underlying_type: &str) -> Enum {
        Enum {
            comment: String::new(),
            name: name.to_string(),
            underlying_type: underlying_type.to_string(),
            items: Vec::new(),
            methods: Vec::new(),
            imports: Imports::new(),
        }
    }
}
