use crate::engine::{Action, NodeRef, Rule};
use crate::rules::{UpgradeState, APP_NAME};
use crate::syntax::{Expr, Stmt};

/// tkinter's blocking event-loop method and its tukaan replacement.
const RUN_LOOP_METHOD: &str = "mainloop";
const NEW_METHOD: &str = "run";

/// Rewrites an expression-statement call `<name>.mainloop()` into
/// `app.run()`.
///
/// In tukaan the event loop hangs off the application context, not the
/// window, so the receiver is always the fixed `app` binding regardless of
/// what the call was made on. Declines until the import rule has recorded
/// that tkinter is in play.
pub struct RewriteMainloopCall;

impl Rule<UpgradeState> for RewriteMainloopCall {
    fn name(&self) -> &'static str {
        "rewrite-mainloop-call"
    }

    fn check(&self, node: NodeRef<'_>, state: &mut UpgradeState) -> Vec<Action> {
        if state.bound_name().is_none() {
            return Vec::new();
        }

        let Stmt::Expr { value } = node.stmt else {
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
        if attr != RUN_LOOP_METHOD {
            return Vec::new();
        }
        let Expr::Name(_) = object.as_ref() else {
            return Vec::new();
        };

        let replacement = Stmt::Expr {
            value: Expr::call(
                Expr::attribute(Expr::name(APP_NAME), NEW_METHOD),
                Vec::new(),
            ),
        };
        vec![Action::replace(node.id, replacement)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;

    fn recorded_state() -> UpgradeState {
        UpgradeState {
            tkinter_used: true,
            tkinter_as: None,
            replacement_as: Some("tk".to_string()),
        }
    }

    fn mainloop_call(receiver: &str) -> Stmt {
        Stmt::Expr {
            value: Expr::call(
                Expr::attribute(Expr::name(receiver), "mainloop"),
                Vec::new(),
            ),
        }
    }

    fn offer(stmt: &Stmt, state: &mut UpgradeState) -> Vec<Action> {
        RewriteMainloopCall.check(
            NodeRef {
                id: 0,
                stmt,
                span: Span::new(0, 14),
            },
            state,
        )
    }

    #[test]
    fn rewrites_to_the_app_run_call() {
        let stmt = mainloop_call("window");
        let mut state = recorded_state();
        let actions = offer(&stmt, &mut state);

        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].payload.to_string(), "app.run()");
    }

    #[test]
    fn declines_before_the_import_rule_ran() {
        let stmt = mainloop_call("window");
        let mut state = UpgradeState::default();
        assert!(offer(&stmt, &mut state).is_empty());
    }

    #[test]
    fn declines_on_other_methods() {
        let stmt = Stmt::Expr {
            value: Expr::call(Expr::attribute(Expr::name("window"), "update"), Vec::new()),
        };
        let mut state = recorded_state();
        assert!(offer(&stmt, &mut state).is_empty());
    }

    #[test]
    fn declines_when_arguments_are_present() {
        let stmt = Stmt::Expr {
            value: Expr::call(
                Expr::attribute(Expr::name("window"), "mainloop"),
                vec![Expr::Verbatim("1".to_string())],
            ),
        };
        let mut state = recorded_state();
        assert!(offer(&stmt, &mut state).is_empty());
    }

    #[test]
    fn declines_on_plain_function_calls() {
        let stmt = Stmt::Expr {
            value: Expr::call(Expr::name("mainloop"), Vec::new()),
        };
        let mut state = recorded_state();
        assert!(offer(&stmt, &mut state).is_empty());
    }
}
