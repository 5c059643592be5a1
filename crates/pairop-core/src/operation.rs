//! The `Operation` trait and built-in two-operand operations.
//!
//! `Operation` is the seam the driver calls through. The binary links one
//! built-in; tests inject closures through `FnOperation`.

/// A pure, total function of two 32-bit operands.
///
/// Implementations must not fail and must not have observable side effects.
/// Arithmetic that could overflow is expected to wrap.
pub trait Operation: Send + Sync {
    /// Apply the operation to `lhs` and `rhs`, in that order.
    fn apply(&self, lhs: i32, rhs: i32) -> i32;

    /// Get the name of this operation.
    fn name(&self) -> &str;
}

/// Wrapping addition.
#[derive(Debug, Default, Clone, Copy)]
pub struct Add;

impl Add {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Operation for Add {
    fn apply(&self, lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_add(rhs)
    }

    fn name(&self) -> &str {
        "add"
    }
}

/// Wrapping subtraction (`lhs - rhs`).
#[derive(Debug, Default, Clone, Copy)]
pub struct Subtract;

impl Subtract {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Operation for Subtract {
    fn apply(&self, lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_sub(rhs)
    }

    fn name(&self) -> &str {
        "sub"
    }
}

/// Wrapping multiplication.
#[derive(Debug, Default, Clone, Copy)]
pub struct Multiply;

impl Multiply {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Operation for Multiply {
    fn apply(&self, lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_mul(rhs)
    }

    fn name(&self) -> &str {
        "mul"
    }
}

/// Adapter that turns a closure into an [`Operation`].
pub struct FnOperation<F> {
    name: String,
    func: F,
}

impl<F> FnOperation<F>
where
    F: Fn(i32, i32) -> i32 + Send + Sync,
{
    /// Wrap `func` under the given name.
    #[must_use]
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Operation for FnOperation<F>
where
    F: Fn(i32, i32) -> i32 + Send + Sync,
{
    fn apply(&self, lhs: i32, rhs: i32) -> i32 {
        (self.func)(lhs, rhs)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
