// scalargrad-core/src/ops/arithmetic.rs

use crate::graph::Op;
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

fn assert_same_graph(a: &Value, b: &Value, operation: &str) {
    assert!(
        Rc::ptr_eq(&a.graph, &b.graph),
        "operands of `{}` must belong to the same graph",
        operation
    );
}

/// Records a leaf holding `value` on the same graph as `like`. This is the
/// coercion step that lets plain numbers mix with `Value`s in expressions.
fn constant(like: &Value, value: f64) -> Value {
    let id = like.graph.borrow_mut().push_leaf(value);
    Value {
        graph: Rc::clone(&like.graph),
        id,
    }
}

/// Addition, `a + b`.
///
/// # Panics
/// Panics if `a` and `b` live on different graphs.
pub fn add(a: &Value, b: &Value) -> Value {
    assert_same_graph(a, b, "add");
    let id = {
        let mut g = a.graph.borrow_mut();
        let v = g.node(a.id).value + g.node(b.id).value;
        g.record(v, Op::Add(a.id, b.id))
    };
    Value {
        graph: Rc::clone(&a.graph),
        id,
    }
}

/// Multiplication, `a * b`.
///
/// # Panics
/// Panics if `a` and `b` live on different graphs.
pub fn mul(a: &Value, b: &Value) -> Value {
    assert_same_graph(a, b, "mul");
    let id = {
        let mut g = a.graph.borrow_mut();
        let v = g.node(a.id).value * g.node(b.id).value;
        g.record(v, Op::Mul(a.id, b.id))
    };
    Value {
        graph: Rc::clone(&a.graph),
        id,
    }
}

/// Power with a constant exponent, `a ^ exponent`.
///
/// Only constant exponents are supported; the exponent is not a graph node
/// and receives no gradient. Domain errors (e.g. a negative base with a
/// fractional exponent) follow IEEE-754 and yield NaN rather than an error.
pub fn pow(a: &Value, exponent: f64) -> Value {
    let id = {
        let mut g = a.graph.borrow_mut();
        let v = g.node(a.id).value.powf(exponent);
        g.record(v, Op::Pow(a.id, exponent))
    };
    Value {
        graph: Rc::clone(&a.graph),
        id,
    }
}

/// Negation, derived as `a * -1`; no dedicated gradient rule.
pub fn neg(a: &Value) -> Value {
    let minus_one = constant(a, -1.0);
    mul(a, &minus_one)
}

/// Subtraction, derived as `a + (-b)`.
pub fn sub(a: &Value, b: &Value) -> Value {
    add(a, &neg(b))
}

/// Division, derived as `a * b^-1`. Division by a zero-valued node yields an
/// IEEE infinity that propagates silently.
pub fn div(a: &Value, b: &Value) -> Value {
    mul(a, &pow(b, -1.0))
}

// --- Operator overloads ---
//
// Each binary operator is provided for value-value, reference-reference,
// value-literal and literal-value combinations, so that commutative
// operations accept the plain number on either side.

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $func:path) => {
        impl $trait for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $func(&self, &rhs)
            }
        }

        impl $trait for &Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $func(self, rhs)
            }
        }

        impl $trait<&Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                $func(&self, rhs)
            }
        }

        impl $trait<Value> for &Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $func(self, &rhs)
            }
        }

        impl $trait<f64> for Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                let rhs = constant(&self, rhs);
                $func(&self, &rhs)
            }
        }

        impl $trait<f64> for &Value {
            type Output = Value;
            fn $method(self, rhs: f64) -> Value {
                let rhs = constant(self, rhs);
                $func(self, &rhs)
            }
        }

        impl $trait<Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                let lhs = constant(&rhs, self);
                $func(&lhs, &rhs)
            }
        }

        impl $trait<&Value> for f64 {
            type Output = Value;
            fn $method(self, rhs: &Value) -> Value {
                let lhs = constant(rhs, self);
                $func(&lhs, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, add);
impl_binary_operator!(Sub, sub, sub);
impl_binary_operator!(Mul, mul, mul);
impl_binary_operator!(Div, div, div);

impl Neg for Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg(&self)
    }
}

impl Neg for &Value {
    type Output = Value;
    fn neg(self) -> Value {
        neg(self)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use crate::graph::Graph;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_and_mul_forward() {
        let graph = Graph::new();
        let a = graph.value(2.0);
        let b = graph.value(-3.0);
        assert_eq!((&a + &b).value(), -1.0);
        assert_eq!((&a * &b).value(), -6.0);
    }

    #[test]
    fn test_operator_symmetry_with_literals() {
        // `a + 2` and `2 + a` must behave identically, forward and backward.
        let graph = Graph::new();
        let a = graph.value(3.0);
        let left = &a + 2.0;
        assert_eq!(left.value(), 5.0);
        left.backward();
        assert_eq!(a.grad(), 1.0);

        let graph = Graph::new();
        let a = graph.value(3.0);
        let right = 2.0 + &a;
        assert_eq!(right.value(), 5.0);
        right.backward();
        assert_eq!(a.grad(), 1.0);

        let graph = Graph::new();
        let a = graph.value(3.0);
        assert_eq!((4.0 * &a).value(), (&a * 4.0).value());
    }

    #[test]
    fn test_derived_operations_forward() {
        let graph = Graph::new();
        let a = graph.value(6.0);
        let b = graph.value(4.0);
        assert_eq!((-&a).value(), -6.0);
        assert_eq!((&a - &b).value(), 2.0);
        assert_eq!((&a / &b).value(), 1.5);
        assert_eq!((1.0 - &b).value(), -3.0);
    }

    #[test]
    fn test_derived_operations_inherit_gradients() {
        // d/da (a / b) = 1/b, d/db (a / b) = -a/b^2, via the mul/pow rules.
        let graph = Graph::new();
        let a = graph.value(6.0);
        let b = graph.value(4.0);
        let q = &a / &b;
        q.backward();
        assert_relative_eq!(a.grad(), 0.25, epsilon = 1e-12);
        assert_relative_eq!(b.grad(), -6.0 / 16.0, epsilon = 1e-12);

        let graph = Graph::new();
        let a = graph.value(6.0);
        let b = graph.value(4.0);
        let d = &a - &b;
        d.backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
    }

    #[test]
    fn test_pow_gradient() {
        // d/dx x^3 = 3 x^2
        let graph = Graph::new();
        let x = graph.value(2.0);
        let y = x.powf(3.0);
        assert_eq!(y.value(), 8.0);
        y.backward();
        assert_relative_eq!(x.grad(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_division_by_zero_propagates_infinity() {
        let graph = Graph::new();
        let a = graph.value(1.0);
        let b = graph.value(0.0);
        let q = &a / &b;
        assert!(q.value().is_infinite());
        // Further arithmetic keeps the special value, no error is raised.
        let r = q + 1.0;
        assert!(r.value().is_infinite());
    }

    #[test]
    #[should_panic(expected = "same graph")]
    fn test_cross_graph_operands_panic() {
        let g1 = Graph::new();
        let g2 = Graph::new();
        let a = g1.value(1.0);
        let b = g2.value(2.0);
        let _ = a + b;
    }
}
