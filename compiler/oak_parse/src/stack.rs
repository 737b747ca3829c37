//! Re-export so grammar modules can write `crate::stack::ensure_sufficient_stack`.

pub(crate) use oak_stack::ensure_sufficient_stack;
