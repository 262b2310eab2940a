//! Integration tests for rendering and activation.

use std::cell::RefCell;
use std::rc::Rc;

use file_browser::browser::{
    Activation, FileBrowser, FileBrowserOptions, MemorySurface, RenderStyle, Surface,
};
use file_browser::tree::{branch_count, leaf_count, FileNode, NodeKind, NodePath};

fn project() -> Vec<FileNode> {
    vec![
        FileNode::folder(
            "scripts",
            vec![
                FileNode::folder("promise", vec![]),
                FileNode::folder(
                    "internal",
                    vec![FileNode::file("queue.ts"), FileNode::file("queue.ts")],
                ),
                FileNode::file("state.ts"),
            ],
        ),
        FileNode::file("index.html"),
        FileNode::folder("assets", vec![FileNode::file("logo.svg")]),
    ]
}

/// Records the address of every node passed to the handler.
fn recording_options(
    forest: Vec<FileNode>,
) -> (FileBrowserOptions<MemorySurface>, Rc<RefCell<Vec<usize>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let options = FileBrowserOptions::new(MemorySurface::new(), forest)
        .with_handler(move |node: &FileNode| sink.borrow_mut().push(address(node)));
    (options, seen)
}

fn address(node: &FileNode) -> usize {
    node as *const FileNode as usize
}

#[test]
fn test_item_counts_match_forest() {
    let forest = project();
    let files = leaf_count(&forest);
    let folders = branch_count(&forest);

    let browser = FileBrowser::new(FileBrowserOptions::new(MemorySurface::new(), forest));

    assert_eq!(browser.surface().count(NodeKind::File), files);
    assert_eq!(browser.surface().count(NodeKind::Folder), folders);
    assert_eq!(files, 5);
    assert_eq!(folders, 4);
}

#[test]
fn test_rows_follow_input_order() {
    let browser = FileBrowser::new(FileBrowserOptions::new(MemorySurface::new(), project()));

    let labels: Vec<&str> = browser.surface().rows().iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec![
            "📂 scripts",
            "📂 promise",
            "📂 internal",
            "📄 queue.ts",
            "📄 queue.ts",
            "📄 state.ts",
            "📄 index.html",
            "📂 assets",
            "📄 logo.svg",
        ]
    );

    let depths: Vec<usize> = browser.surface().rows().iter().map(|r| r.depth).collect();
    assert_eq!(depths, vec![0, 1, 1, 2, 2, 1, 0, 0, 1]);
}

#[test]
fn test_indentation_grows_with_depth() {
    let browser = FileBrowser::new(FileBrowserOptions::new(MemorySurface::new(), project()));

    for row in browser.surface().rows() {
        assert_eq!(row.indent, 1 + 2 * row.depth);
    }
}

#[test]
fn test_activating_each_file_passes_that_node() {
    let (options, seen) = recording_options(project());
    let mut browser = FileBrowser::new(options);

    let triggers: Vec<NodePath> = browser
        .surface()
        .rows()
        .iter()
        .filter_map(|row| row.trigger.cloned())
        .collect();
    assert_eq!(triggers.len(), 5);

    for trigger in &triggers {
        assert_eq!(browser.activate(trigger), Activation::Dispatched);
    }

    let root = browser.root();
    let expected = vec![
        address(&root[0].children[1].children[0]),
        address(&root[0].children[1].children[1]),
        address(&root[0].children[2]),
        address(&root[1]),
        address(&root[2].children[0]),
    ];
    assert_eq!(*seen.borrow(), expected);
}

#[test]
fn test_duplicate_names_are_distinct() {
    let (options, seen) = recording_options(project());
    let mut browser = FileBrowser::new(options);

    browser.activate(&NodePath::from(vec![0, 1, 1]));

    let second = address(&browser.root()[0].children[1].children[1]);
    let first = address(&browser.root()[0].children[1].children[0]);
    assert_eq!(*seen.borrow(), vec![second]);
    assert_ne!(first, second);
}

#[test]
fn test_folders_never_dispatch() {
    let (options, seen) = recording_options(project());
    let mut browser = FileBrowser::new(options);

    for path in [vec![0], vec![0, 0], vec![0, 1], vec![2]] {
        assert_eq!(browser.activate(&NodePath::from(path)), Activation::Ignored);
    }
    assert!(seen.borrow().is_empty());

    let folder_rows = browser
        .surface()
        .rows()
        .into_iter()
        .filter(|row| row.kind == NodeKind::Folder)
        .filter(|row| row.trigger.is_some())
        .count();
    assert_eq!(folder_rows, 0);
}

#[test]
fn test_missing_handler_is_a_no_op() {
    let mut browser = FileBrowser::new(FileBrowserOptions::new(MemorySurface::new(), project()));
    let before = browser.surface().rows().len();

    let trigger = browser.surface().trigger_for("📄 index.html").unwrap();
    assert_eq!(browser.activate(&trigger), Activation::NoHandler);
    assert_eq!(browser.surface().rows().len(), before);
}

#[test]
fn test_reconstruct_replaces_content() {
    let browser = FileBrowser::new(FileBrowserOptions::new(MemorySurface::new(), project()));
    let surface = browser.into_surface();

    let browser = FileBrowser::new(FileBrowserOptions::new(
        surface,
        vec![FileNode::file("only.txt")],
    ));

    let labels: Vec<&str> = browser.surface().rows().iter().map(|r| r.label).collect();
    assert_eq!(labels, vec!["📄 only.txt"]);
    assert_eq!(browser.surface().lists().len(), 1);
}

#[test]
fn test_reconstruct_with_empty_forest_clears() {
    let browser = FileBrowser::new(FileBrowserOptions::new(MemorySurface::new(), project()));
    let browser = FileBrowser::new(FileBrowserOptions::new(browser.into_surface(), Vec::new()));
    assert!(browser.surface().is_empty());
}

#[test]
fn test_spec_example() {
    let forest = vec![FileNode::folder(
        "scripts",
        vec![FileNode::file("state.ts")],
    )];
    let (options, seen) = recording_options(forest);
    let mut browser = FileBrowser::new(options);

    let lists = browser.surface().lists();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].items.len(), 1);
    let folder = &lists[0].items[0];
    assert_eq!(folder.label, "📂 scripts");
    let nested = folder.children.as_ref().unwrap();
    assert_eq!(nested.items.len(), 1);
    assert_eq!(nested.items[0].label, "📄 state.ts");

    let trigger = nested.items[0].trigger.clone().unwrap();
    browser.activate(&trigger);
    assert_eq!(*seen.borrow(), vec![address(&browser.root()[0].children[0])]);
}

#[test]
fn test_deep_tree_renders_every_level() {
    let mut node = FileNode::file("bottom.txt");
    for level in (0..200).rev() {
        node = FileNode::folder(format!("level{}", level), vec![node]);
    }

    let browser = FileBrowser::new(FileBrowserOptions::new(MemorySurface::new(), vec![node]));
    let rows = browser.surface().rows();
    assert_eq!(rows.len(), 201);
    assert_eq!(rows.last().unwrap().depth, 200);
}

#[test]
#[should_panic(expected = "handler failed")]
fn test_handler_panic_propagates() {
    let mut browser = FileBrowser::new(
        FileBrowserOptions::new(MemorySurface::new(), vec![FileNode::file("boom")])
            .with_handler(|_: &FileNode| panic!("handler failed")),
    );
    browser.activate(&NodePath::root(0));
}

/// A surface that only records the calls it receives.
#[derive(Default)]
struct CallLog {
    calls: Vec<String>,
}

impl Surface for CallLog {
    fn clear(&mut self) {
        self.calls.push("clear".to_string());
    }

    fn append(&mut self, list: file_browser::browser::ItemList) {
        self.calls.push(format!("append {}", list.items.len()));
    }
}

#[test]
fn test_render_clears_before_appending() {
    let mut browser = FileBrowser::new(
        FileBrowserOptions::new(CallLog::default(), project()).with_style(RenderStyle::default()),
    );
    browser.render();
    assert_eq!(
        browser.surface().calls,
        vec!["clear", "append 3", "clear", "append 3"]
    );
}
