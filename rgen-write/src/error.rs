use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("String formatting error while rendering")]
    Render(#[from] std::fmt::Error),
    #[error("Failed to normalize generated file \"{name}\": {detail}")]
    Normalize { name: String, detail: String },
    #[error("Failed to write \"{}\"", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}", format_aggregate(.0))]
    Aggregate(Vec<Error>),
}

fn format_aggregate(errors: &[Error]) -> String {
    let mut s = format!("{} generation task(s) failed:", errors.len());
    for e in errors {
        s.push_str(&format!("\n  {e}"));
    }
    s
}
