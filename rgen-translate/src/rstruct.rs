use crate::imports::Imports;
use crate::rfunction::Function;

/// A translated record: a wrapper struct holding its ffi value either
/// embedded or, when pointer-composed, behind one extra indirection.
#[derive(Debug, Clone)]
pub struct Struct {
    pub comment: String,
    pub name: String,
    /// Foreign name of the wrapped ffi type, e.g. `CXIndex`
    pub cname: String,
    pub is_pointer_composition: bool,
    pub methods: Vec<Function>,
    pub imports: Imports,
}

impl Struct {
    pub fn new(name: &str, cname: &str) -> Struct {
        Struct {
            comment: String::new(),
            name: name.to_string(),
            cname: cname.to_string(),
            is_pointer_composition: false,
            methods: Vec::new(),
            imports: Imports::new(),
        }
    }
}
