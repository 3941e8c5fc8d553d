use std::path::Path;
use std::sync::Arc;

use rgen_translate::{Enum, Function, Imports, Struct};
use rgen_util::GenConfig;
use tracing::{instrument, trace};

use crate::error::Error;
use crate::gen_rust::render_file;
use crate::rustfmt::normalize_source;
use crate::waiter::GenerateWaiter;
type Result<T, E = Error> = std::result::Result<T, E>;

/// Suffix appended to a unit's name to form its output file name
pub const GENERATED_SUFFIX: &str = "_gen.rs";

/// While declarations are being built, cross-references are spelt
/// against the staging module path; the final files live inside that
/// module, so the prefix is rewritten before writing.
const STAGING_IMPORT_PREFIX: &str = "use crate::clang::";
const FINAL_IMPORT_PREFIX: &str = "use crate::";

/// One output unit: a logical group of declarations destined for one
/// generated module file.
///
/// Builders append declarations, then call
/// [`generate`](File::generate) once; the import set is the union of
/// every contained declaration's requirements, computed at that point.
#[derive(Debug, Default)]
pub struct File {
    pub name: String,
    pub imports: Imports,
    pub functions: Vec<Function>,
    pub enums: Vec<Enum>,
    pub structs: Vec<Struct>,
}

impl File {
    pub fn new(name: &str) -> File {
        File {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Render this unit and dispatch its normalize-and-write task.
    ///
    /// Returns synchronously only a rendering failure, in which case no
    /// file is produced for this unit. Normalize and write outcomes are
    /// reported through `waiter` and are only observable after
    /// [`GenerateWaiter::wait`].
    #[instrument(level = "trace", skip(self, waiter), fields(name = %self.name))]
    pub fn generate(&mut self, cfg: &GenConfig, waiter: &Arc<GenerateWaiter>) -> Result<()> {
        for enm in &self.enums {
            self.imports.merge(&enm.imports);
            for fun in &enm.methods {
                self.imports.merge(&fun.imports);
            }
        }

        for st in &self.structs {
            self.imports.merge(&st.imports);
            for fun in &st.methods {
                self.imports.merge(&fun.imports);
            }
        }

        for fun in &self.functions {
            self.imports.merge(&fun.imports);
        }

        let rendered = render_file(self)?;
        let rendered = rendered.replace(STAGING_IMPORT_PREFIX, FINAL_IMPORT_PREFIX);

        let name = self.name.clone();
        let path = cfg
            .output_dir
            .join(format!("{}{}", self.name, GENERATED_SUFFIX));
        let format = cfg.format;

        waiter.begin_task();
        let waiter = Arc::clone(waiter);
        std::thread::spawn(move || {
            normalize_and_write(&name, rendered.into_bytes(), &path, format, &waiter);
            waiter.end_task();
        });

        Ok(())
    }
}

/// Body of one write task. Always ends in a write attempt: a normalize
/// failure is recorded but the unformatted bytes still go to disk so the
/// malformed output stays inspectable.
fn normalize_and_write(
    name: &str,
    bytes: Vec<u8>,
    path: &Path,
    format: bool,
    waiter: &GenerateWaiter,
) {
    let out = if format {
        match normalize_source(name, &bytes) {
            Ok(out) => {
                trace!("normalized {name}");
                out
            }
            Err(e) => {
                waiter.record_error(e);
                bytes
            }
        }
    } else {
        bytes
    };

    if let Err(e) = write_source(path, &out) {
        waiter.record_error(e);
    }
}

/// Write the generated bytes with owner-only read/write permissions
#[cfg(unix)]
fn write_source(path: &Path, bytes: &[u8]) -> Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let map_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
        .map_err(map_err)?;

    file.write_all(bytes).map_err(map_err)
}

#[cfg(not(unix))]
fn write_source(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
