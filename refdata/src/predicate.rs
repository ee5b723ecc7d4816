//! Predicate expression algebra for reference-data queries.
//!
//! An [`Expression`] is a binary tree of basic comparisons composed with
//! `AND`/`OR`. The trading system only builds and walks these trees; the
//! storage layer formats them into its own query language via the
//! [`ExpressionVisitor`], which receives the expression as a flat lexeme
//! stream (basic predicate, composite operation, sub-expression
//! begin/end) so the original operator grouping is reproducible.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A queryable record type: ties an expression to the record's field enum.
pub trait Model {
    type Field: Copy + fmt::Display + fmt::Debug;
}

/// Comparison value of a basic predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    UInt(u64),
    Int(i64),
    Decimal(Decimal),
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{value}"),
            Value::UInt(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Decimal(value) => write!(f, "{value}"),
            Value::String(value) => write!(f, "'{value}'"),
        }
    }
}

/// Comparison operation of a basic predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BasicOperation {
    Eq,
    Neq,
    Less,
    Greater,
    LessEq,
    GreaterEq,
}

impl fmt::Display for BasicOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasicOperation::Eq => write!(f, "="),
            BasicOperation::Neq => write!(f, "!="),
            BasicOperation::Less => write!(f, "<"),
            BasicOperation::Greater => write!(f, ">"),
            BasicOperation::LessEq => write!(f, "<="),
            BasicOperation::GreaterEq => write!(f, ">="),
        }
    }
}

/// Boolean combinator of two sub-expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompositeOperation {
    And,
    Or,
}

impl fmt::Display for CompositeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositeOperation::And => write!(f, "AND"),
            CompositeOperation::Or => write!(f, "OR"),
        }
    }
}

/// Predicate expression over the fields of record type `M`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression<M: Model> {
    Basic {
        field: M::Field,
        op: BasicOperation,
        value: Value,
    },
    Composite {
        left: Box<Expression<M>>,
        op: CompositeOperation,
        right: Box<Expression<M>>,
    },
}

impl<M: Model> Expression<M> {
    pub fn basic(field: M::Field, op: BasicOperation, value: impl Into<Value>) -> Self {
        Expression::Basic {
            field,
            op,
            value: value.into(),
        }
    }

    pub fn eq(field: M::Field, value: impl Into<Value>) -> Self {
        Self::basic(field, BasicOperation::Eq, value)
    }

    pub fn neq(field: M::Field, value: impl Into<Value>) -> Self {
        Self::basic(field, BasicOperation::Neq, value)
    }

    pub fn less(field: M::Field, value: impl Into<Value>) -> Self {
        Self::basic(field, BasicOperation::Less, value)
    }

    pub fn greater(field: M::Field, value: impl Into<Value>) -> Self {
        Self::basic(field, BasicOperation::Greater, value)
    }

    pub fn less_eq(field: M::Field, value: impl Into<Value>) -> Self {
        Self::basic(field, BasicOperation::LessEq, value)
    }

    pub fn greater_eq(field: M::Field, value: impl Into<Value>) -> Self {
        Self::basic(field, BasicOperation::GreaterEq, value)
    }

    pub fn and(self, right: Expression<M>) -> Self {
        Expression::Composite {
            left: Box::new(self),
            op: CompositeOperation::And,
            right: Box::new(right),
        }
    }

    pub fn or(self, right: Expression<M>) -> Self {
        Expression::Composite {
            left: Box::new(self),
            op: CompositeOperation::Or,
            right: Box::new(right),
        }
    }

    pub fn is_basic(&self) -> bool {
        matches!(self, Expression::Basic { .. })
    }

    pub fn is_composite(&self) -> bool {
        !self.is_basic()
    }

    /// Walk the expression as a lexeme stream.
    ///
    /// Composite operands that are themselves composite are bracketed with
    /// `sub_expression_begin`/`sub_expression_end`, which preserves the
    /// grouping of the original composition order.
    pub fn accept<V: ExpressionVisitor<M>>(&self, visitor: &mut V) {
        match self {
            Expression::Basic { field, op, value } => visitor.basic(*field, *op, value),
            Expression::Composite { left, op, right } => {
                Self::accept_operand(left, visitor);
                visitor.composite_operation(*op);
                Self::accept_operand(right, visitor);
            }
        }
    }

    fn accept_operand<V: ExpressionVisitor<M>>(operand: &Expression<M>, visitor: &mut V) {
        if operand.is_composite() {
            visitor.sub_expression_begin();
            operand.accept(visitor);
            visitor.sub_expression_end();
        } else {
            operand.accept(visitor);
        }
    }
}

/// Receiver of the lexeme stream of an [`Expression`].
pub trait ExpressionVisitor<M: Model> {
    fn basic(&mut self, field: M::Field, op: BasicOperation, value: &Value);
    fn composite_operation(&mut self, op: CompositeOperation);
    fn sub_expression_begin(&mut self);
    fn sub_expression_end(&mut self);
}

/// Formats an expression into a human-readable string, mostly for logging
/// and tests.
#[derive(Debug, Default)]
pub struct ExpressionFormatter {
    output: String,
}

impl ExpressionFormatter {
    pub fn format<M: Model>(expression: &Expression<M>) -> String {
        let mut formatter = ExpressionFormatter::default();
        expression.accept(&mut formatter);
        formatter.output
    }
}

impl<M: Model> ExpressionVisitor<M> for ExpressionFormatter {
    fn basic(&mut self, field: M::Field, op: BasicOperation, value: &Value) {
        if !self.output.is_empty() && !self.output.ends_with('(') {
            self.output.push(' ');
        }
        self.output.push_str(&format!("{field} {op} {value}"));
    }

    fn composite_operation(&mut self, op: CompositeOperation) {
        self.output.push_str(&format!(" {op}"));
    }

    fn sub_expression_begin(&mut self) {
        if !self.output.is_empty() {
            self.output.push(' ');
        }
        self.output.push('(');
    }

    fn sub_expression_end(&mut self) {
        self.output.push(')');
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venue::{Venue, VenueField};
    use rust_decimal_macros::dec;

    type VenueExpression = Expression<Venue>;

    #[test]
    fn basic_expression_formats_field_op_value() {
        let expression = VenueExpression::eq(VenueField::VenueId, "FASTMATCH");
        assert!(expression.is_basic());
        assert_eq!(
            ExpressionFormatter::format(&expression),
            "VenueId = 'FASTMATCH'"
        );
    }

    #[test]
    fn composite_of_basics_needs_no_brackets() {
        let expression = VenueExpression::eq(VenueField::VenueId, "XLON")
            .and(VenueExpression::eq(VenueField::CancelOnDisconnect, true));
        assert!(expression.is_composite());
        assert_eq!(
            ExpressionFormatter::format(&expression),
            "VenueId = 'XLON' AND CancelOnDisconnect = true"
        );
    }

    #[test]
    fn nested_composites_are_bracketed() {
        let left = VenueExpression::eq(VenueField::VenueId, "XLON")
            .and(VenueExpression::neq(VenueField::Name, "London"));
        let expression = left.or(VenueExpression::eq(VenueField::CancelOnDisconnect, false));
        assert_eq!(
            ExpressionFormatter::format(&expression),
            "(VenueId = 'XLON' AND Name != 'London') OR CancelOnDisconnect = false"
        );
    }

    #[test]
    fn ordering_operations_format_with_symbols() {
        let expression = VenueExpression::greater_eq(VenueField::Timezone, 0i64)
            .and(VenueExpression::less(VenueField::Timezone, 24i64));
        assert_eq!(
            ExpressionFormatter::format(&expression),
            "Timezone >= 0 AND Timezone < 24"
        );
    }

    #[test]
    fn decimal_values_format_plainly() {
        let expression = VenueExpression::greater(VenueField::Timezone, dec!(5.5));
        assert_eq!(ExpressionFormatter::format(&expression), "Timezone > 5.5");
    }
}
