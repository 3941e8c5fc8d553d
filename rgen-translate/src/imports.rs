use std::collections::BTreeSet;

/// The set of `use` paths a declaration needs in its generated file.
///
/// Kept sorted and deduplicated so the emitted import block is stable
/// regardless of the order declarations were appended in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    paths: BTreeSet<String>,
}

impl Imports {
    pub fn new() -> Imports {
        Imports::default()
    }

    pub fn add(&mut self, path: &str) {
        self.paths.insert(path.to_string());
    }

    pub fn merge(&mut self, other: &Imports) {
        for path in &other.paths {
            self.paths.insert(path.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Imports {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut imports = Imports::new();
        for path in iter {
            imports.add(path);
        }
        imports
    }
}
