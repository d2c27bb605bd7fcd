//! Mirrors a template directory into a new project directory.

use std::ffi::{OsStr, OsString};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use console::style;
use log::{debug, info};

use crate::error::{Result, ScaffoldError};
use crate::template::{render_template_file, TEMPLATE_SUFFIX};
use crate::template_variables::RenderContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    /// A file ending in [`TEMPLATE_SUFFIX`], rendered into place.
    Templated,
    /// Any other file, copied byte for byte.
    Static,
}

/// One entry of the template tree, as seen during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub source: PathBuf,
    /// Path relative to the template root. Empty for the root itself.
    pub relative: PathBuf,
    pub kind: EntryKind,
}

impl TemplateEntry {
    /// The template root itself. A root that is a link to a directory is fine.
    fn root(source: PathBuf) -> Result<Self> {
        let meta = fs::metadata(&source).map_err(|e| ScaffoldError::walk(&source, e))?;
        if !meta.is_dir() {
            return Err(ScaffoldError::walk(&source, "not a directory"));
        }
        Ok(Self {
            source,
            relative: PathBuf::new(),
            kind: EntryKind::Directory,
        })
    }

    /// An entry below the root. Links to files are copied or rendered through the
    /// link; links to directories are rejected instead of walked.
    fn inspect(source: PathBuf, relative: PathBuf) -> Result<Self> {
        let meta = fs::symlink_metadata(&source).map_err(|e| ScaffoldError::walk(&source, e))?;
        let is_dir = if meta.file_type().is_symlink() {
            let target = fs::metadata(&source).map_err(|e| ScaffoldError::walk(&source, e))?;
            if target.is_dir() {
                return Err(ScaffoldError::walk(&source, "symlink to directory"));
            }
            false
        } else {
            meta.is_dir()
        };
        let kind = if is_dir {
            EntryKind::Directory
        } else if is_templated(&source) {
            EntryKind::Templated
        } else {
            EntryKind::Static
        };
        Ok(Self {
            source,
            relative,
            kind,
        })
    }

    /// Where this entry lands under `project_dir`, with the template suffix stripped.
    pub fn destination(&self, project_dir: &Path) -> Result<PathBuf> {
        if self.relative.as_os_str().is_empty() {
            return Ok(project_dir.to_path_buf());
        }
        let dest = project_dir.join(&self.relative);
        if self.kind != EntryKind::Templated {
            return Ok(dest);
        }
        let stripped = dest
            .file_name()
            .and_then(strip_template_suffix)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                ScaffoldError::walk(&self.source, "empty file name after stripping suffix")
            })?;
        Ok(dest.with_file_name(stripped))
    }
}

fn is_templated(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|n| n.as_encoded_bytes().ends_with(TEMPLATE_SUFFIX.as_bytes()))
}

/// File name without [`TEMPLATE_SUFFIX`]; the name does not need to be UTF-8.
fn strip_template_suffix(name: &OsStr) -> Option<OsString> {
    let stem = name
        .as_encoded_bytes()
        .strip_suffix(TEMPLATE_SUFFIX.as_bytes())?;
    // SAFETY: `stem` comes from an `OsStr` and is cut right before an ASCII suffix.
    Some(unsafe { OsStr::from_encoded_bytes_unchecked(stem) }.to_os_string())
}

/// Walk `template_root` and recreate it at `project_dir`.
///
/// Directories are created before anything inside them. A directory is listed
/// before its destination is created, so a missing or unreadable template root
/// leaves nothing on disk. The first failure aborts the walk; whatever was
/// created up to that point stays.
///
/// Returns every created path in creation order.
pub fn materialize(
    template_root: &Path,
    project_dir: &Path,
    ctx: &RenderContext,
) -> Result<Vec<PathBuf>> {
    let root = TemplateEntry::root(template_root.to_path_buf())?;

    let mut created = Vec::new();
    let mut pending = vec![root];
    while let Some(entry) = pending.pop() {
        let dest = entry.destination(project_dir)?;
        match entry.kind {
            EntryKind::Directory => {
                let children = list_children(&entry)?;
                make_directory(&dest)?;
                // reversed so that popping visits children in name order
                pending.extend(children.into_iter().rev());
            }
            EntryKind::Templated => {
                info!("creating file: {}", style(dest.display()).bold());
                debug!("rendering {}", entry.source.display());
                render_template_file(&entry.source, &dest, ctx)?;
            }
            EntryKind::Static => {
                info!("creating file: {}", style(dest.display()).bold());
                copy_file(&entry.source, &dest)?;
            }
        }
        created.push(dest);
    }

    Ok(created)
}

fn list_children(dir: &TemplateEntry) -> Result<Vec<TemplateEntry>> {
    let walk_err = |e: std::io::Error| ScaffoldError::walk(&dir.source, e);
    let mut names = fs::read_dir(&dir.source)
        .map_err(walk_err)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(walk_err)?;
    names.sort();

    names
        .into_iter()
        .map(|name| {
            TemplateEntry::inspect(dir.source.join(&name), dir.relative.join(&name))
        })
        .collect()
}

fn make_directory(path: &Path) -> Result<()> {
    info!("creating directory: {}/", style(path.display()).bold());
    fs::create_dir(path).map_err(|e| ScaffoldError::DirectoryCreation {
        path: path.to_path_buf(),
        source: e,
    })
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let copy_err = |e: std::io::Error| ScaffoldError::FileCopy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    };
    let bytes = fs::read(from).map_err(copy_err)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(to)
        .map_err(copy_err)?;
    file.write_all(&bytes).map_err(copy_err)?;
    Ok(())
}
