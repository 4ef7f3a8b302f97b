//! Template sets — which files exist and where they come from.
//!
//! | Set          | Files                                   | Used when            |
//! |--------------|-----------------------------------------|----------------------|
//! | `base`       | `README.md`, `LICENSE`, `package.json`  | always               |
//! | `additional` | `spec.emu`, `deploy.sh`, `.travis.yml`  | spec + CI requested  |

use std::path::{Path, PathBuf};

use crate::error::{io_err, RenderError};

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const BASE: &[(&str, &str)] = &[
    ("README.md", include_str!("templates/base/README.md")),
    ("LICENSE", include_str!("templates/base/LICENSE")),
    ("package.json", include_str!("templates/base/package.json")),
];

const ADDITIONAL: &[(&str, &str)] = &[
    ("spec.emu", include_str!("templates/additional/spec.emu")),
    ("deploy.sh", include_str!("templates/additional/deploy.sh")),
    (".travis.yml", include_str!("templates/additional/.travis.yml")),
];

/// Base name of the deployment script. It is executed as-is on CI, so it is
/// copied verbatim and never parsed as a template.
pub const RESERVED_SCRIPT: &str = "deploy.sh";

// ---------------------------------------------------------------------------
// TemplateSetKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateSetKind {
    Base,
    Additional,
}

impl TemplateSetKind {
    /// Subdirectory name, both embedded and on disk.
    pub fn dir_name(self) -> &'static str {
        match self {
            TemplateSetKind::Base => "base",
            TemplateSetKind::Additional => "additional",
        }
    }

    /// Sets to render, in order: base first, then additional.
    pub fn selection(include_spec: bool) -> &'static [TemplateSetKind] {
        if include_spec {
            &[TemplateSetKind::Base, TemplateSetKind::Additional]
        } else {
            &[TemplateSetKind::Base]
        }
    }

    fn embedded(self) -> &'static [(&'static str, &'static str)] {
        match self {
            TemplateSetKind::Base => BASE,
            TemplateSetKind::Additional => ADDITIONAL,
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateFile
// ---------------------------------------------------------------------------

/// One template, read once, rendered once, written once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// `<set>/<name>` for embedded templates, the real path otherwise.
    pub source_path: PathBuf,
    /// File name used for the output as well.
    pub base_name: String,
    pub raw_content: String,
}

impl TemplateFile {
    pub fn is_reserved(&self) -> bool {
        self.base_name == RESERVED_SCRIPT
    }

    /// Name the file is registered under in tera; unique across sets.
    pub fn template_name(&self) -> String {
        self.source_path.to_string_lossy().replace('\\', "/")
    }
}

// ---------------------------------------------------------------------------
// TemplateSource
// ---------------------------------------------------------------------------

/// Where template sets are read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateSource {
    /// Sets compiled into the binary.
    #[default]
    Embedded,
    /// A directory holding `base/` and optionally `additional/`.
    Directory(PathBuf),
}

impl TemplateSource {
    /// Directory source when `dir` is set, embedded otherwise.
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        dir.map_or(TemplateSource::Embedded, TemplateSource::Directory)
    }

    /// Load a single set.
    ///
    /// On disk, every regular file directly inside `<dir>/<set>/` is a
    /// template, sorted by name. A missing `additional/` is an empty set; a
    /// missing `base/` is an error.
    pub fn load(&self, kind: TemplateSetKind) -> Result<Vec<TemplateFile>, RenderError> {
        match self {
            TemplateSource::Embedded => Ok(kind
                .embedded()
                .iter()
                .map(|(name, content)| TemplateFile {
                    source_path: Path::new(kind.dir_name()).join(name),
                    base_name: (*name).to_string(),
                    raw_content: (*content).to_string(),
                })
                .collect()),
            TemplateSource::Directory(root) => {
                let dir = root.join(kind.dir_name());
                if kind == TemplateSetKind::Additional && !dir.exists() {
                    return Ok(vec![]);
                }
                load_dir(&dir)
            }
        }
    }

    /// All files for a run: base, plus additional when `include_spec`.
    pub fn select(&self, include_spec: bool) -> Result<Vec<TemplateFile>, RenderError> {
        let mut files = Vec::new();
        for kind in TemplateSetKind::selection(include_spec) {
            files.extend(self.load(*kind)?);
        }
        tracing::debug!(count = files.len(), include_spec, "selected templates");
        Ok(files)
    }
}

fn load_dir(dir: &Path) -> Result<Vec<TemplateFile>, RenderError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = std::fs::metadata(&path).map_err(|e| io_err(&path, e))?;
        if meta.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let raw_content = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        let base_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        files.push(TemplateFile { source_path: path, base_name, raw_content });
    }
    Ok(files)
}
