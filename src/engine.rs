use crate::error::MergeError;
use crate::filter::ExtensionFilter;
use crate::options::{MergeBuilder, MergeOptions};
use crate::output::RecordWriter;
use crate::types::{FileOutcome, MergeSummary};
use ignore::{DirEntry, WalkBuilder};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        Self {
            inner: builder.build(),
        }
    }
    fn into_files(self) -> impl Iterator<Item = Result<PathBuf, MergeError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => is_candidate(&entry).then(|| Ok(entry.into_path())),
            Err(e) if e.depth() == Some(0) => Some(Err(MergeError::Walk(e.to_string()))),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
    }
}
// symlinks count unless they resolve to a directory; dangling ones get a placeholder
fn is_candidate(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}
fn check_root(root: &Path) -> Result<(), MergeError> {
    fs::read_dir(root)
        .map(drop)
        .map_err(|e| MergeError::root(root, e))
}
fn read_file_content(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}
fn is_same_file(candidate: &Path, own_output: &Path) -> bool {
    fs::canonicalize(candidate).is_ok_and(|p| p == own_output)
}
pub fn merge(options: MergeOptions) -> Result<MergeSummary, MergeError> {
    check_root(&options.root)?;
    let file =
        File::create(&options.output).map_err(|e| MergeError::output(&options.output, e))?;
    let own_output = if options.exclude_output {
        fs::canonicalize(&options.output).ok()
    } else {
        None
    };
    let mut summary = run(
        &options,
        BufWriter::new(file),
        &options.output,
        own_output.as_deref(),
    )?;
    summary.output = Some(options.output);
    Ok(summary)
}
pub fn merge_into<W: Write>(options: &MergeOptions, writer: W) -> Result<MergeSummary, MergeError> {
    check_root(&options.root)?;
    run(options, writer, Path::new("<stream>"), None)
}
pub fn merge_files(
    root: impl Into<PathBuf>,
    output: impl Into<PathBuf>,
    extensions: Option<&[&str]>,
) -> Result<MergeSummary, MergeError> {
    let options = MergeBuilder::new(root)
        .output(output)
        .filter(extensions.map(|exts| exts.iter().collect::<ExtensionFilter>()))
        .build();
    merge(options)
}
fn run<W: Write>(
    options: &MergeOptions,
    sink: W,
    sink_path: &Path,
    own_output: Option<&Path>,
) -> Result<MergeSummary, MergeError> {
    let root = &options.root;
    debug!("Merging {} into {}", root.display(), sink_path.display());
    let mut writer = RecordWriter::new(sink);
    let mut summary = MergeSummary {
        root: root.clone(),
        ..Default::default()
    };
    let sink_err = |e: io::Error| MergeError::output(sink_path, e);
    for path in Walker::new(root).into_files() {
        let path = path?;
        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        if let Some(filter) = &options.extensions {
            if !filter.matches(&path) {
                summary.skipped += 1;
                continue;
            }
        }
        if own_output.is_some_and(|own| is_same_file(&path, own)) {
            debug!("Leaving out output file {}", relative.display());
            summary.excluded_output = true;
            continue;
        }
        writer.header(&relative).map_err(sink_err)?;
        let outcome = match read_file_content(&path) {
            Ok(content) => {
                writer.content(&content).map_err(sink_err)?;
                debug!("Merged {} ({} bytes)", relative.display(), content.len());
                FileOutcome {
                    path: relative,
                    bytes: content.len() as u64,
                    error: None,
                }
            }
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                writer.placeholder(&e).map_err(sink_err)?;
                FileOutcome {
                    path: relative,
                    bytes: 0,
                    error: Some(e.to_string()),
                }
            }
        };
        summary.files.push(outcome);
    }
    writer.finish().map_err(sink_err)?;
    info!(
        "Merged {} file(s), {} unreadable, {} filtered out",
        summary.written(),
        summary.failed(),
        summary.skipped
    );
    Ok(summary)
}
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    #[test]
    fn walker_sorts_by_name_and_skips_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b/inner.txt"), "").unwrap();
        fs::write(dir.path().join("c.txt"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        let files: Vec<_> = Walker::new(dir.path())
            .into_files()
            .map(|p| p.unwrap().strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            files,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b").join("inner.txt"),
                PathBuf::from("c.txt"),
            ]
        );
    }
    #[test]
    fn walker_includes_hidden_and_ignored_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.log\n").unwrap();
        fs::write(dir.path().join("debug.log"), "x").unwrap();
        let count = Walker::new(dir.path()).into_files().count();
        assert_eq!(count, 2);
    }
    #[cfg(unix)]
    #[test]
    fn walker_keeps_dangling_links_and_skips_directory_links() {
        use std::os::unix::fs::symlink;
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real/x.txt"), "x").unwrap();
        symlink(dir.path().join("real"), dir.path().join("link_dir")).unwrap();
        symlink(dir.path().join("gone.txt"), dir.path().join("dangling.txt")).unwrap();
        let files: Vec<_> = Walker::new(dir.path())
            .into_files()
            .map(|p| p.unwrap().strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            files,
            vec![
                PathBuf::from("dangling.txt"),
                PathBuf::from("real").join("x.txt"),
            ]
        );
    }
    #[test]
    fn invalid_utf8_is_a_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.bin");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = read_file_content(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
    #[test]
    fn check_root_rejects_files_and_missing_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        assert!(matches!(check_root(&file), Err(MergeError::Root { .. })));
        assert!(matches!(
            check_root(&dir.path().join("missing")),
            Err(MergeError::Root { .. })
        ));
        assert!(check_root(dir.path()).is_ok());
    }
}
