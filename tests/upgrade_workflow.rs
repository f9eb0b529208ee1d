//! End-to-end rewrite workflow tests: the upgrade rules running through
//! the full parse → walk → resolve → render fixpoint loop.

use tkupgrade::rules::upgrade_session;
use tkupgrade::{Action, ImportAlias, NodeRef, Rule, Session, Stmt};

fn upgrade(source: &str) -> String {
    let mut session = upgrade_session().unwrap();
    session.run(source).unwrap().text
}

#[test]
fn plain_import_is_upgraded() {
    let outcome = upgrade_session().unwrap().run("import tkinter\n").unwrap();
    assert_eq!(outcome.text, "import tukaan as tk\n");
    assert!(outcome.changed);
    assert!(outcome.converged);
}

#[test]
fn import_rule_records_shared_state() {
    let mut session = upgrade_session().unwrap();
    session.run("import tkinter\n").unwrap();

    let state = session.state();
    assert!(state.tkinter_used);
    assert_eq!(state.tkinter_as, None);
    assert_eq!(state.replacement_as.as_deref(), Some("tk"));
}

#[test]
fn aliased_app_is_fully_upgraded() {
    let source = "import tkinter as gui\nwindow = gui.Tk()\ngui.mainloop()\n";
    let expected = "import tukaan as tk\napp = tk.App()\nwindow = tk.MainWindow()\napp.run()\n";
    assert_eq!(upgrade(source), expected);
}

#[test]
fn unaliased_app_is_fully_upgraded() {
    let source = "import tkinter\nroot = tkinter.Tk()\nroot.mainloop()\n";
    let expected = "import tukaan as tk\napp = tk.App()\nroot = tk.MainWindow()\napp.run()\n";
    assert_eq!(upgrade(source), expected);
}

#[test]
fn untouched_lines_survive_byte_for_byte() {
    let source = "\
import os  # keep me
import tkinter as gui

TITLE = \"demo\"   # odd   spacing
window = gui.Tk()

print(TITLE)
gui.mainloop()
";
    let rewritten = upgrade(source);

    assert!(rewritten.contains("import os  # keep me\n"));
    assert!(rewritten.contains("TITLE = \"demo\"   # odd   spacing\n"));
    assert!(rewritten.contains("print(TITLE)\n"));
    assert!(rewritten.contains("import tukaan as tk\n"));
    assert!(rewritten.contains("app = tk.App()\nwindow = tk.MainWindow()\n"));
    assert!(rewritten.contains("app.run()\n"));
}

#[test]
fn file_without_tkinter_comes_back_identical() {
    let source = "import os\n\nx = os.getcwd()\nprint(x)\n";
    let mut session = upgrade_session().unwrap();
    let outcome = session.run(source).unwrap();

    assert_eq!(outcome.text, source);
    assert!(!outcome.changed);
    assert_eq!(outcome.passes, 1);
    assert!(!session.state().tkinter_used);
}

#[test]
fn usage_before_import_needs_the_second_pass() {
    // The binding rule declines in pass 1 because the import rule has not
    // recorded the alias yet when the assignment is walked.
    let source = "window = gui.Tk()\nimport tkinter as gui\n";
    let mut session = upgrade_session().unwrap();
    let outcome = session.run(source).unwrap();

    assert_eq!(
        outcome.text,
        "app = tk.App()\nwindow = tk.MainWindow()\nimport tukaan as tk\n"
    );
    assert!(outcome.passes > 2);
}

#[test]
fn nested_statements_keep_their_indentation() {
    let source = "\
def main():
    import tkinter
    root = tkinter.Tk()
    root.mainloop()
";
    let expected = "\
def main():
    import tukaan as tk
    app = tk.App()
    root = tk.MainWindow()
    app.run()
";
    assert_eq!(upgrade(source), expected);
}

#[test]
fn upgrade_is_idempotent() {
    let source = "import tkinter as gui\nwindow = gui.Tk()\ngui.mainloop()\n";
    let once = upgrade(source);
    let twice = upgrade(&once);
    assert_eq!(once, twice);
}

#[test]
fn mainloop_alone_is_untouched_without_an_import() {
    let source = "window.mainloop()\n";
    assert_eq!(upgrade(source), source);
}

#[test]
fn parse_failure_produces_no_output() {
    let mut session = upgrade_session().unwrap();
    assert!(session.run("def broken(:\n").is_err());
}

/// Rewrites `import <from>` to `import <to>`; used to force conflicts.
struct SwapImport {
    name: &'static str,
    from: &'static str,
    to: &'static str,
}

impl Rule<()> for SwapImport {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self, node: NodeRef<'_>, _state: &mut ()) -> Vec<Action> {
        let Stmt::Import { names } = node.stmt else {
            return Vec::new();
        };
        if names.len() != 1 || names[0].name != self.from {
            return Vec::new();
        }
        vec![Action::replace(
            node.id,
            Stmt::Import {
                names: vec![ImportAlias::new(self.to, None)],
            },
        )]
    }
}

#[test]
fn conflicting_edits_fall_to_the_earlier_registered_rule() {
    let rules: Vec<Box<dyn Rule<()>>> = vec![
        Box::new(SwapImport {
            name: "swap-to-y",
            from: "x",
            to: "y",
        }),
        Box::new(SwapImport {
            name: "swap-to-z",
            from: "x",
            to: "z",
        }),
    ];
    let mut session = Session::new(rules, ()).unwrap();
    let outcome = session.run("import x\n").unwrap();

    assert_eq!(outcome.text, "import y\n");
    assert_eq!(outcome.dropped.len(), 1);
    assert_eq!(outcome.dropped[0].rule, "swap-to-z");
}
