//! Runtime values.
//!
//! `Value` is the closed set of dynamic types the interpreter operates over.
//! Scalars and strings are cheap to clone; lists and objects are reference
//! types, so cloning a `Value::List` yields an alias of the same storage.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use oak_ir::ClassDecl;
use oak_stack::ensure_sufficient_stack;
use rustc_hash::{FxHashMap, FxHashSet};

/// A dynamically typed runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Double(f64),
    Bool(bool),
    Str(Rc<str>),
    List(ListValue),
    Null,
    Object(Rc<ObjectInstance>),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Create a fresh list that owns `items`.
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(ListValue::new(items))
    }

    /// Name of this value's runtime type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Integer",
            Value::Double(_) => "Double",
            Value::Bool(_) => "Boolean",
            Value::Str(_) => "String",
            Value::List(_) => "List",
            Value::Null => "Null",
            Value::Object(_) => "Object",
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Structural equality: same tag and equal payload.
///
/// Lists compare element-wise, objects by identity. An `Int` never equals a
/// `Double`, and doubles follow IEEE equality (`NaN != NaN`).
///
/// Cyclic lists terminate: a pair of lists already under comparison further
/// up is taken as equal, so two lists that unfold into the same infinite
/// structure compare equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        values_eq(self, other, &mut FxHashSet::default())
    }
}

#[allow(clippy::float_cmp, reason = "language equality is IEEE equality")]
fn values_eq(a: &Value, b: &Value, active: &mut FxHashSet<(ListId, ListId)>) -> bool {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Double(a), Value::Double(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::List(a), Value::List(b)) => lists_eq(a, b, active),
        (Value::Null, Value::Null) => true,
        (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

fn lists_eq(a: &ListValue, b: &ListValue, active: &mut FxHashSet<(ListId, ListId)>) -> bool {
    let pair = (a.id(), b.id());
    if a.ptr_eq(b) || active.contains(&pair) {
        return true;
    }
    let (left, right) = (a.borrow(), b.borrow());
    if left.len() != right.len() {
        return false;
    }
    active.insert(pair);
    let equal = ensure_sufficient_stack(|| {
        left.iter()
            .zip(right.iter())
            .all(|(x, y)| values_eq(x, y, active))
    });
    active.remove(&pair);
    equal
}

/// Textual form used by `print` and string concatenation.
///
/// A list nested inside itself, directly or through other lists, prints as
/// `(this List)` at the point where it repeats.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Double(d) => fmt_double(*d, f),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => fmt_list(items, f, &mut FxHashSet::default()),
            Value::Null => f.write_str("null"),
            Value::Object(obj) => write!(f, "{}@object", obj.class_name()),
        }
    }
}

/// `[a, b, c]`, tracking the lists currently being printed in `open`.
fn fmt_list(
    list: &ListValue,
    f: &mut fmt::Formatter<'_>,
    open: &mut FxHashSet<ListId>,
) -> fmt::Result {
    if list.is_empty() {
        return f.write_str("[]");
    }
    f.write_str("[")?;
    open.insert(list.id());
    let result = ensure_sufficient_stack(|| {
        for (i, item) in list.borrow().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match item {
                Value::List(inner) if open.contains(&inner.id()) => f.write_str("(this List)")?,
                Value::List(inner) => fmt_list(inner, f, open)?,
                _ => write!(f, "{item}")?,
            }
        }
        Ok(())
    });
    open.remove(&list.id());
    result?;
    f.write_str("]")
}

/// Doubles always carry a fractional part (`3.0`), infinities spell out.
fn fmt_double(d: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if d.is_nan() {
        f.write_str("NaN")
    } else if d.is_infinite() {
        f.write_str(if d > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        // `{:?}` keeps the trailing `.0` that `{}` drops.
        write!(f, "{d:?}")
    }
}

/// Identity of a list's storage, used to detect cycles.
type ListId = *const RefCell<Vec<Value>>;

/// Shared, mutable list storage.
///
/// Cloning a `ListValue` aliases the same backing vector, so in-place
/// mutation through one binding is visible through every other.
#[derive(Clone)]
#[repr(transparent)]
pub struct ListValue(Rc<RefCell<Vec<Value>>>);

impl ListValue {
    pub fn new(items: Vec<Value>) -> Self {
        ListValue(Rc::new(RefCell::new(items)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Vec<Value>> {
        self.0.borrow_mut()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Copy of the current elements; the elements themselves stay shared.
    pub fn snapshot(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// True if both handles point at the same storage.
    pub fn ptr_eq(&self, other: &ListValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    #[inline]
    fn id(&self) -> ListId {
        Rc::as_ptr(&self.0)
    }
}

/// Debug shows the textual form, which is cycle-safe.
impl fmt::Debug for ListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListValue(")?;
        fmt_list(self, f, &mut FxHashSet::default())?;
        write!(f, ")")
    }
}

/// Releasing the last handle to a deeply nested list would otherwise recurse
/// once per level on the host stack.
impl Drop for ListValue {
    fn drop(&mut self) {
        if Rc::strong_count(&self.0) != 1 {
            return;
        }
        let items = match self.0.try_borrow_mut() {
            Ok(mut items) => std::mem::take(&mut *items),
            Err(_) => return,
        };
        ensure_sufficient_stack(|| drop(items));
    }
}

/// An instance created by `new ClassName()`.
///
/// No constructor runs, so fields start absent.
#[derive(Debug)]
pub struct ObjectInstance {
    class: Rc<ClassDecl>,
    fields: RefCell<FxHashMap<String, Value>>,
}

impl ObjectInstance {
    pub fn new(class: Rc<ClassDecl>) -> Self {
        ObjectInstance {
            class,
            fields: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class.name
    }

    pub fn get_field(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }

}
