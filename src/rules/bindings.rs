use crate::engine::{Action, NodeRef, Rule};
use crate::rules::{UpgradeState, APP_NAME};
use crate::syntax::{Expr, Stmt};

/// Factory method tkinter uses to create the root window.
const CREATE_METHOD: &str = "Tk";
/// tukaan factories for the application context and the window.
const APP_FACTORY: &str = "App";
const WINDOW_FACTORY: &str = "MainWindow";

/// Rewrites `<target> = <alias>.Tk()` into an application-context binding
/// followed by a window binding:
///
/// ```text
/// app = tk.App()
/// <target> = tk.MainWindow()
/// ```
///
/// The Replace and the InsertAfter form one atomic proposal; accepting the
/// replacement without the inserted window binding would leave `<target>`
/// unbound. Declines until [`RewriteImports`](crate::rules::RewriteImports)
/// has recorded the tkinter binding.
pub struct RewriteWindowBinding;

impl Rule<UpgradeState> for RewriteWindowBinding {
    fn name(&self) -> &'static str {
        "rewrite-window-binding"
    }

    fn check(&self, node: NodeRef<'_>, state: &mut UpgradeState) -> Vec<Action> {
        let Some(bound) = state.bound_name() else {
            return Vec::new();
        };
        let Some(new_alias) = state.replacement_as.as_deref() else {
            return Vec::new();
        };

        let Stmt::Assign { target, value } = node.stmt else {
            return Vec::new();
        };
        let Expr::Name(target_name) = target else {
            return Vec::new();
        };
        let Expr::Call { func, args } = value else {
            return Vec::new();
        };
        if !args.is_empty() {
            return Vec::new();
        }
        let Expr::Attribute { value: object, attr } = func.as_ref() else {
            return Vec::new();
        };
        if attr != CREATE_METHOD {
            return Vec::new();
        }
        let Expr::Name(object_name) = object.as_ref() else {
            return Vec::new();
        };
        if object_name != bound {
            return Vec::new();
        }

        let app_binding = Stmt::Assign {
            target: Expr::name(APP_NAME),
            value: Expr::call(
                Expr::attribute(Expr::name(new_alias), APP_FACTORY),
                Vec::new(),
            ),
        };
        let window_binding = Stmt::Assign {
            target: Expr::name(target_name.clone()),
            value: Expr::call(
                Expr::attribute(Expr::name(new_alias), WINDOW_FACTORY),
                Vec::new(),
            ),
        };

        vec![
            Action::replace(node.id, app_binding),
            Action::insert_after(node.id, window_binding),
        ]
    }
}
