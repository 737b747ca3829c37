//! Expression evaluation.

use std::rc::Rc;

use oak_ir::{BinaryOp, Expr, ExprKind, IncDecOp, NumberLiteral};
use oak_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{
    inc_dec_non_integer, index_not_integer, integer_overflow, no_such_property, not_indexable,
    object_method_call, this_unavailable, undeclared_assignment, undefined_class,
    undefined_field, undefined_function, undefined_variable, EvalError, EvalResult,
};
use crate::methods::{count_value, dispatch_builtin_method, element_index};
use crate::operators::{evaluate_binary, evaluate_compound};
use crate::unary_operators::evaluate_unary;
use crate::value::ObjectInstance;
use crate::Value;

impl Interpreter {
    /// Evaluate `expr`, tagging any error with its line.
    pub(super) fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr)).map_err(|err| err.at_line(expr.line))
    }

    fn eval_expr_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Number(NumberLiteral::Int(n)) => Ok(Value::Int(*n)),
            ExprKind::Number(NumberLiteral::Double(d)) => Ok(Value::Double(*d)),
            ExprKind::Str(s) => Ok(Value::string(s.as_str())),
            ExprKind::Null => Ok(Value::Null),

            ExprKind::Variable(name) => self.read_variable(name),

            ExprKind::Assign { target, value } => {
                let value = self.eval_expr(value)?;
                if self.call_stack.assign(target, value.clone()) {
                    Ok(value)
                } else {
                    Err(undeclared_assignment(target))
                }
            }

            ExprKind::CompoundAssign { target, op, value } => {
                self.eval_compound_assign(target, *op, value)
            }

            ExprKind::IncDec { target, op, prefix } => self.eval_inc_dec(target, *op, *prefix),

            ExprKind::Binary { left, op, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(&left, *op, &right)
            }

            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                evaluate_unary(*op, &operand)
            }

            ExprKind::Ternary {
                cond,
                then_expr,
                else_expr,
            } => {
                if self.eval_condition("ternary", cond)? {
                    self.eval_expr(then_expr)
                } else {
                    self.eval_expr(else_expr)
                }
            }

            ExprKind::Call { name, args } => {
                let args = self.eval_args(args)?;
                self.call_current_class(name, args)
            }

            ExprKind::MethodCall {
                target,
                method,
                args,
            } => {
                let receiver = self.eval_expr(target)?;
                let args = self.eval_args(args)?;
                match &receiver {
                    Value::Object(obj) => Err(object_method_call(method, obj.class_name())),
                    _ => dispatch_builtin_method(&receiver, method, &args),
                }
            }

            ExprKind::List(items) => Ok(Value::list(self.eval_args(items)?)),

            ExprKind::Index { target, index } => {
                let target = self.eval_expr(target)?;
                let index = self.eval_expr(index)?;
                eval_index(&target, &index)
            }

            ExprKind::Property { target, name } => {
                let target = self.eval_expr(target)?;
                match &target {
                    Value::List(list) if name == "length" => Ok(count_value(list.len())),
                    Value::Object(obj) => obj
                        .get_field(name)
                        .ok_or_else(|| undefined_field(name, obj.class_name())),
                    _ => Err(no_such_property(name, &target)),
                }
            }

            // No constructor runs; the instance starts without fields.
            ExprKind::New { class, .. } => {
                let decl = self
                    .classes
                    .get(class)
                    .cloned()
                    .ok_or_else(|| undefined_class(class))?;
                Ok(Value::Object(Rc::new(ObjectInstance::new(decl))))
            }

            ExprKind::This => Err(this_unavailable()),
        }
    }

    fn read_variable(&self, name: &str) -> EvalResult {
        self.call_stack
            .lookup(name)
            .cloned()
            .ok_or_else(|| undefined_variable(name))
    }

    /// Evaluate call arguments left to right.
    fn eval_args(&mut self, args: &[Expr]) -> Result<Vec<Value>, EvalError> {
        args.iter().map(|arg| self.eval_expr(arg)).collect()
    }

    /// Call a method of the class whose method is currently executing.
    pub(super) fn call_current_class(&mut self, name: &str, args: Vec<Value>) -> EvalResult {
        let class = self
            .call_stack
            .current_frame()
            .map(|frame| Rc::clone(&frame.class))
            .ok_or_else(|| undefined_function(name))?;
        self.invoke(&class, name, args)
    }

    /// `target op= value`: read, combine, store, and yield the new value.
    fn eval_compound_assign(&mut self, target: &str, op: BinaryOp, value: &Expr) -> EvalResult {
        let current = self.read_variable(target)?;
        let rhs = self.eval_expr(value)?;
        let result = evaluate_compound(&current, op, &rhs)?;
        self.call_stack.define(target, result.clone());
        Ok(result)
    }

    /// `++x` yields the new value, `x++` the old one.
    fn eval_inc_dec(&mut self, target: &str, op: IncDecOp, prefix: bool) -> EvalResult {
        let current = self.read_variable(target)?;
        let Value::Int(old) = current else {
            return Err(inc_dec_non_integer(op, target, &current));
        };
        let new = old.checked_add(op.delta()).ok_or_else(|| {
            integer_overflow(match op {
                IncDecOp::Increment => "increment",
                IncDecOp::Decrement => "decrement",
            })
        })?;
        self.call_stack.define(target, Value::Int(new));
        Ok(Value::Int(if prefix { new } else { old }))
    }
}

/// `target[index]` on a list or string.
fn eval_index(target: &Value, index: &Value) -> EvalResult {
    let &Value::Int(index) = index else {
        return Err(index_not_integer(index));
    };
    match target {
        Value::List(list) => {
            let items = list.borrow();
            let pos = element_index(index, items.len())?;
            Ok(items[pos].clone())
        }
        Value::Str(s) => {
            let pos = element_index(index, s.chars().count())?;
            Ok(s.chars()
                .nth(pos)
                .map_or(Value::Null, |c| Value::string(c.to_string())))
        }
        _ => Err(not_indexable(target)),
    }
}
