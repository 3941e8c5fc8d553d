use std::{
    ops::Deref,
    path::{Path, PathBuf},
};

use env_logger::fmt::Color;
use log::Level;

use serde::{Deserialize, Serialize};
use similar::{ChangeTag, TextDiff};

pub enum Error {
    Any(Box<dyn std::error::Error + 'static>),
    Compare,
}

impl<E> From<E> for Error
where
    E: std::error::Error + 'static,
{
    fn from(e: E) -> Self {
        Error::Any(Box::new(e))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Any(e) => write!(f, "{e:?}"),
            Error::Compare => write!(f, "Comparison failed"),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub fn run_test<F>(closure: F) -> Result<(), Error>
where
    F: FnOnce() -> Result<(), Error>,
{
    use tracing::error;

    init_log();

    let res = closure();

    res.map_err(|err| {
        error!("{err}");

        if let Error::Any(ref err) = err {
            for e in source_iter(err.deref()) {
                error!("  because: {e}")
            }
        }

        err
    })
}

pub fn init_log() {
    use std::io::Write;

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format(|buf, record| -> Result<(), std::io::Error> {
            let mut level_style = buf.style();
            match record.level() {
                Level::Trace => level_style.set_color(Color::Blue),
                Level::Debug => level_style.set_color(Color::White),
                Level::Info => level_style.set_color(Color::Cyan),
                Level::Warn => level_style.set_color(Color::Yellow),
                Level::Error => level_style.set_color(Color::Red),
            };

            writeln!(
                buf,
                "{} [{}:{}] {}",
                level_style.value(record.level()),
                record.file().unwrap_or(""),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();
}

pub fn compare(left: &str, right: &str) -> Result<(), Error> {
    use colored::*;
    let diff = TextDiff::from_lines(left, right);

    let mut same = true;
    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Delete => {
                same = false;
                print!("{}", format!("-| {change}").color(Color::Red));
            }
            ChangeTag::Insert => {
                same = false;
                print!("{}", format!("+| {change}").color(Color::Green));
            }
            ChangeTag::Equal => {
                print!("{}", format!(" | {change}").color(Color::BrightBlack));
            }
        };
    }

    if same {
        Ok(())
    } else {
        println!();
        Err(Error::Compare)
    }
}

pub fn source_iter(
    error: &(impl std::error::Error + ?Sized),
) -> impl Iterator<Item = &(dyn std::error::Error + 'static)> {
    SourceIter {
        current: error.source(),
    }
}

pub struct SourceIter<'a> {
    current: Option<&'a (dyn std::error::Error + 'static)>,
}

impl<'a> Iterator for SourceIter<'a> {
    type Item = &'a (dyn std::error::Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current;
        self.current = self.current.and_then(std::error::Error::source);
        current
    }
}

#[derive(Debug)]
pub struct Trace(pub backtrace::Backtrace);

impl Trace {
    pub fn new() -> Trace {
        Trace(backtrace::Backtrace::new())
    }
}

impl Default for Trace {
    fn default() -> Self {
        Trace::new()
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match std::env::var("RUST_BACKTRACE") {
            Ok(value) if value == "1" => {
                write!(f, "Backtrace:\n{:?}", self.0)
            }
            _ => Ok(()),
        }
    }
}

impl std::error::Error for Trace {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// JSON struct describing where and how generated module files are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// Directory the generated `*_gen.rs` files land in
    pub output_dir: PathBuf,
    /// Name of the module the generated files belong to, e.g. `clang`
    pub module: String,
    /// Run the rustfmt normalize pass before writing. Golden tests that
    /// need byte-stable output turn this off
    pub format: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            output_dir: PathBuf::from("."),
            module: "clang".to_string(),
            format: true,
        }
    }
}

pub fn write_gen_config(path: impl AsRef<Path>, config: &GenConfig) -> Result<(), std::io::Error> {
    std::fs::write(path.as_ref(), serde_json::to_string_pretty(&config)?)
}

pub fn read_gen_config(
    path: impl AsRef<Path>,
) -> Result<GenConfig, Box<dyn std::error::Error + 'static + Send + Sync>> {
    let s = std::fs::read_to_string(path)?;
    let config = serde_json::from_str::<GenConfig>(&s)?;
    Ok(config)
}
