use std::fs;
use std::path::Path;

use serde::Deserialize;
use walkdir::WalkDir;

use crate::error::{BrowserError, Result};

use super::node::FileNode;
use super::options::SourceOptions;

/// A tree document is either a list of roots or a single root node.
#[derive(Deserialize)]
#[serde(untagged)]
enum ForestDocument {
    Many(Vec<FileNode>),
    One(FileNode),
}

/// Parse a JSON tree document into a forest.
pub fn parse_forest(contents: &str) -> std::result::Result<Vec<FileNode>, serde_json::Error> {
    let document: ForestDocument = serde_json::from_str(contents)?;
    Ok(match document {
        ForestDocument::Many(roots) => roots,
        ForestDocument::One(root) => vec![root],
    })
}

/// Read a JSON tree document from disk.
pub fn load_forest(path: &Path) -> Result<Vec<FileNode>> {
    if !path.exists() {
        return Err(BrowserError::PathNotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| BrowserError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let forest = parse_forest(&contents).map_err(|source| BrowserError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), roots = forest.len(), "Loaded file tree");
    Ok(forest)
}

/// Build a forest from the entries of a directory.
///
/// The directory itself is not part of the result: its entries become the
/// roots. Entries are ordered by file name at every level. Unreadable
/// entries below the root are skipped with a warning.
pub fn scan_forest(root: &Path, options: &SourceOptions) -> Result<Vec<FileNode>> {
    let metadata = fs::metadata(root).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            BrowserError::PathNotFound(root.to_path_buf())
        } else {
            BrowserError::Io {
                path: root.to_path_buf(),
                source,
            }
        }
    })?;

    if !metadata.is_dir() {
        return Err(BrowserError::Io {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name();

    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let include_hidden = options.include_hidden;
    let entries = walker
        .into_iter()
        .filter_entry(move |e| include_hidden || e.depth() == 0 || !is_hidden(e));

    // stack[0] collects the roots; every other element is an open folder
    let mut stack = vec![FileNode::folder("", Vec::new())];

    for result in entries {
        let entry = match result {
            Ok(e) => e,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                tracing::warn!(error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        close_folders(&mut stack, entry.depth());

        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().is_dir() {
            stack.push(FileNode::folder(name, Vec::new()));
        } else if let Some(parent) = stack.last_mut() {
            parent.children.push(FileNode::file(name));
        }
    }

    close_folders(&mut stack, 1);

    let forest = stack.pop().map(|root| root.children).unwrap_or_default();
    tracing::debug!(path = %root.display(), roots = forest.len(), "Scanned directory tree");
    Ok(forest)
}

/// Pop open folders until the top of the stack is the parent for `depth`.
fn close_folders(stack: &mut Vec<FileNode>, depth: usize) {
    while stack.len() > depth {
        let Some(done) = stack.pop() else { break };
        match stack.last_mut() {
            Some(parent) => parent.children.push(done),
            None => {
                stack.push(done);
                break;
            }
        }
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::node::NodeKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_array() {
        let forest = parse_forest(
            r#"[{"name":"scripts","type":"folder","children":[{"name":"state.ts","type":"file"}]}]"#,
        )
        .unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].kind, NodeKind::Folder);
        assert_eq!(forest[0].children[0].name, "state.ts");
    }

    #[test]
    fn test_parse_single_root() {
        let forest = parse_forest(r#"{"name":"main.rs","type":"file"}"#).unwrap();
        assert_eq!(forest, vec![FileNode::file("main.rs")]);
    }

    #[test]
    fn test_parse_folder_without_children() {
        let forest = parse_forest(r#"[{"name":"promise","type":"folder"}]"#).unwrap();
        assert!(forest[0].is_folder());
        assert!(forest[0].children.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_kind() {
        assert!(parse_forest(r#"[{"name":"x","type":"symlink"}]"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_forest(Path::new("/nonexistent/tree.json")).unwrap_err();
        assert!(matches!(err, BrowserError::PathNotFound(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tree.json");
        fs::write(&path, "not json").unwrap();

        let err = load_forest(&path).unwrap_err();
        assert!(matches!(err, BrowserError::Parse { .. }));
    }

    #[test]
    fn test_scan_builds_nested_forest() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("scripts/internal")).unwrap();
        fs::write(temp.path().join("scripts/state.ts"), "").unwrap();
        fs::write(temp.path().join("scripts/internal/queue.ts"), "").unwrap();
        fs::write(temp.path().join("README.md"), "").unwrap();

        let forest = scan_forest(temp.path(), &SourceOptions::new()).unwrap();

        assert_eq!(
            forest,
            vec![
                FileNode::file("README.md"),
                FileNode::folder(
                    "scripts",
                    vec![
                        FileNode::folder("internal", vec![FileNode::file("queue.ts")]),
                        FileNode::file("state.ts"),
                    ]
                ),
            ]
        );
    }

    #[test]
    fn test_scan_skips_hidden_by_default() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        fs::write(temp.path().join(".git/HEAD"), "").unwrap();
        fs::write(temp.path().join("visible.txt"), "").unwrap();

        let forest = scan_forest(temp.path(), &SourceOptions::new()).unwrap();
        assert_eq!(forest, vec![FileNode::file("visible.txt")]);

        let forest = scan_forest(temp.path(), &SourceOptions::new().with_hidden(true)).unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].name, ".git");
        assert_eq!(forest[0].children, vec![FileNode::file("HEAD")]);
    }

    #[test]
    fn test_scan_respects_max_depth() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("a/b")).unwrap();
        fs::write(temp.path().join("a/b/deep.txt"), "").unwrap();

        let forest = scan_forest(temp.path(), &SourceOptions::new().with_max_depth(1)).unwrap();
        assert_eq!(forest, vec![FileNode::folder("a", vec![])]);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_symlinks_when_asked() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("real")).unwrap();
        fs::write(temp.path().join("real/a.txt"), "").unwrap();
        std::os::unix::fs::symlink(temp.path().join("real"), temp.path().join("link")).unwrap();

        let forest = scan_forest(temp.path(), &SourceOptions::new()).unwrap();
        assert_eq!(forest[0], FileNode::file("link"));

        let options = SourceOptions::new().with_follow_symlinks(true);
        let forest = scan_forest(temp.path(), &options).unwrap();
        assert_eq!(
            forest[0],
            FileNode::folder("link", vec![FileNode::file("a.txt")])
        );
    }

    #[test]
    fn test_scan_missing_directory() {
        let err = scan_forest(Path::new("/nonexistent/dir"), &SourceOptions::new()).unwrap_err();
        assert!(matches!(err, BrowserError::PathNotFound(_)));
    }
}
