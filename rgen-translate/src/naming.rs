use crate::rtype::{
    RustType, RUST_I16, RUST_I32, RUST_I64, RUST_I8, RUST_U16, RUST_U32, RUST_U64, RUST_U8,
};

/// Strip the conventional `CX` prefix (and any underscore remnant) from a
/// foreign name, e.g. `CXTranslationUnit` becomes `TranslationUnit`.
pub fn trim_language_prefix(name: &str) -> String {
    let name = name.strip_prefix("CX").unwrap_or(name);
    name.trim_start_matches('_').to_string()
}

/// One rule pairing a length-field name with the buffer it counts.
#[derive(Debug, Copy, Clone)]
enum LengthRule {
    StripPrefix(&'static str),
    StripSuffix(&'static str),
    /// Strip only when the remainder starts with an uppercase letter, so
    /// `NumTokens` matches but `Number` does not
    StripTitlePrefix(&'static str),
}

impl LengthRule {
    fn apply<'a>(&self, name: &'a str) -> Option<&'a str> {
        match self {
            LengthRule::StripPrefix(prefix) => name.strip_prefix(prefix),
            LengthRule::StripSuffix(suffix) => name.strip_suffix(suffix),
            LengthRule::StripTitlePrefix(prefix) => name
                .strip_prefix(prefix)
                .filter(|rest| rest.chars().next().map_or(false, char::is_uppercase)),
        }
    }
}

/// Evaluated first-match-wins; order is part of the contract and covered
/// by tests, e.g. `num_tokens` must hit `num_` before `num`.
const LENGTH_RULES: &[LengthRule] = &[
    LengthRule::StripPrefix("num_"),
    LengthRule::StripPrefix("num"),
    LengthRule::StripSuffix("_size"),
    LengthRule::StripTitlePrefix("Num"),
];

/// Derive the name of the sibling buffer field a length field counts,
/// or an empty string when no rule associates one.
pub fn array_name_from_length(length_cname: &str) -> String {
    for rule in LENGTH_RULES {
        if let Some(name) = rule.apply(length_cname) {
            return name.to_string();
        }
    }

    String::new()
}

/// Whether the resolved type is one of the eight fixed-width integer
/// names, used to confirm a candidate length field is actually numeric.
pub fn is_integer(ty: &RustType) -> bool {
    matches!(
        ty.rust_name.as_str(),
        RUST_I8 | RUST_U8 | RUST_I16 | RUST_U16 | RUST_I32 | RUST_U32 | RUST_I64 | RUST_U64
    )
}
