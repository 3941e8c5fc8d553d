use crate::imports::Imports;

/// A pre-built function or method declaration, carrying its rendered
/// source text and the imports that text relies on.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub body: String,
    pub imports: Imports,
}

impl Function {
    pub fn new(name: &str, body: &str) -> Function {
        Function {
            name: name.to_string(),
            body: body.to_string(),
            imports: Imports::new(),
        }
    }

    pub fn with_import(mut self, path: &str) -> Function {
        self.imports.add(path);
        self
    }
}
