//! Statement execution and control flow.

use oak_ir::{ElseIf, Expr, ExprKind, Stmt, StmtKind};
use oak_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Interpreter;
use crate::errors::{non_boolean_condition, not_iterable, EvalError};
use crate::Value;

/// How a statement finished.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecOutcome {
    /// Fell through to the next statement.
    Normal,
    Break,
    Continue,
    /// `return`, carrying its value (`Null` for a bare `return;`).
    Return(Value),
}

/// What a loop does after one pass over its body.
enum LoopStep {
    Next,
    Exit,
    Propagate(ExecOutcome),
}

impl LoopStep {
    fn after_body(outcome: ExecOutcome) -> Self {
        match outcome {
            ExecOutcome::Normal | ExecOutcome::Continue => LoopStep::Next,
            ExecOutcome::Break => LoopStep::Exit,
            ExecOutcome::Return(_) => LoopStep::Propagate(outcome),
        }
    }
}

impl Interpreter {
    /// Execute statements in order, stopping at the first non-normal outcome.
    pub(super) fn exec_block(&mut self, stmts: &[Stmt]) -> Result<ExecOutcome, EvalError> {
        for stmt in stmts {
            match self.exec_stmt(stmt)? {
                ExecOutcome::Normal => {}
                outcome => return Ok(outcome),
            }
        }
        Ok(ExecOutcome::Normal)
    }

    fn exec_stmt(&mut self, stmt: &Stmt) -> Result<ExecOutcome, EvalError> {
        trace!(line = stmt.line, kind = stmt_kind_name(&stmt.kind), "exec");
        ensure_sufficient_stack(|| self.exec_stmt_inner(stmt)).map_err(|err| err.at_line(stmt.line))
    }

    fn exec_stmt_inner(&mut self, stmt: &Stmt) -> Result<ExecOutcome, EvalError> {
        match &stmt.kind {
            // Nested declarations have no runtime effect.
            StmtKind::Function(_) => Ok(ExecOutcome::Normal),

            StmtKind::Var { name, init } => {
                let value = self.eval_expr(init)?;
                self.call_stack.define(name.as_str(), value);
                Ok(ExecOutcome::Normal)
            }

            StmtKind::Print(expr) => {
                let value = self.eval_expr(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(ExecOutcome::Normal)
            }

            StmtKind::Expr(expr) => {
                self.exec_expr_stmt(expr)?;
                Ok(ExecOutcome::Normal)
            }

            StmtKind::Return(value) => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr)?,
                    None => Value::Null,
                };
                Ok(ExecOutcome::Return(value))
            }

            StmtKind::If {
                cond,
                then_body,
                else_ifs,
                else_body,
            } => self.exec_if(cond, then_body, else_ifs, else_body.as_deref()),

            StmtKind::While { cond, body } => {
                while self.eval_condition("while", cond)? {
                    match LoopStep::after_body(self.exec_block(body)?) {
                        LoopStep::Next => {}
                        LoopStep::Exit => break,
                        LoopStep::Propagate(outcome) => return Ok(outcome),
                    }
                }
                Ok(ExecOutcome::Normal)
            }

            StmtKind::For {
                init,
                cond,
                step,
                body,
            } => {
                if let Some(init) = init {
                    self.exec_stmt(init)?;
                }
                loop {
                    if let Some(cond) = cond {
                        if !self.eval_condition("for", cond)? {
                            break;
                        }
                    }
                    match LoopStep::after_body(self.exec_block(body)?) {
                        LoopStep::Next => {}
                        LoopStep::Exit => break,
                        LoopStep::Propagate(outcome) => return Ok(outcome),
                    }
                    if let Some(step) = step {
                        self.eval_expr(step)?;
                    }
                }
                Ok(ExecOutcome::Normal)
            }

            StmtKind::ForEach {
                var,
                iterable,
                body,
            } => {
                let items = self.iteration_items(iterable)?;
                for item in items {
                    self.call_stack.define(var.as_str(), item);
                    match LoopStep::after_body(self.exec_block(body)?) {
                        LoopStep::Next => {}
                        LoopStep::Exit => break,
                        LoopStep::Propagate(outcome) => return Ok(outcome),
                    }
                }
                Ok(ExecOutcome::Normal)
            }

            StmtKind::Break => Ok(ExecOutcome::Break),
            StmtKind::Continue => Ok(ExecOutcome::Continue),
        }
    }

    /// A bare call statement invokes the named method with no arguments;
    /// its argument expressions are not evaluated. Any other expression is
    /// evaluated for effect.
    fn exec_expr_stmt(&mut self, expr: &Expr) -> Result<(), EvalError> {
        match &expr.kind {
            ExprKind::Call { name, .. } => self
                .call_current_class(name, Vec::new())
                .map_err(|err| err.at_line(expr.line))?,
            _ => self.eval_expr(expr)?,
        };
        Ok(())
    }

    fn exec_if(
        &mut self,
        cond: &Expr,
        then_body: &[Stmt],
        else_ifs: &[ElseIf],
        else_body: Option<&[Stmt]>,
    ) -> Result<ExecOutcome, EvalError> {
        if self.eval_condition("if", cond)? {
            return self.exec_block(then_body);
        }
        for arm in else_ifs {
            if self.eval_condition("else-if", &arm.cond)? {
                return self.exec_block(&arm.body);
            }
        }
        match else_body {
            Some(body) => self.exec_block(body),
            None => Ok(ExecOutcome::Normal),
        }
    }

    /// Evaluate a condition that must produce a Boolean.
    pub(super) fn eval_condition(
        &mut self,
        construct: &'static str,
        cond: &Expr,
    ) -> Result<bool, EvalError> {
        let value = self.eval_expr(cond)?;
        value
            .as_bool()
            .ok_or_else(|| non_boolean_condition(construct, &value).at_line(cond.line))
    }

    /// Elements a for-each loop visits, fixed when the loop starts.
    ///
    /// Lists are snapshotted; strings yield one-character strings.
    fn iteration_items(&mut self, iterable: &Expr) -> Result<Vec<Value>, EvalError> {
        match self.eval_expr(iterable)? {
            Value::List(list) => Ok(list.snapshot()),
            Value::Str(s) => Ok(s.chars().map(|c| Value::string(c.to_string())).collect()),
            other => Err(not_iterable(&other).at_line(iterable.line)),
        }
    }
}

fn stmt_kind_name(kind: &StmtKind) -> &'static str {
    match kind {
        StmtKind::Function(_) => "def",
        StmtKind::Var { .. } => "var",
        StmtKind::Print(_) => "print",
        StmtKind::Expr(_) => "expr",
        StmtKind::Return(_) => "return",
        StmtKind::If { .. } => "if",
        StmtKind::While { .. } => "while",
        StmtKind::For { .. } => "for",
        StmtKind::ForEach { .. } => "for-each",
        StmtKind::Break => "break",
        StmtKind::Continue => "continue",
    }
}
