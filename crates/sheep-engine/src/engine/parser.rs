//! Formula text parsing.
//!
//! The grammar is deliberately naive. Operator classes are scanned in the
//! fixed order `= < + - * /` and the first class present anywhere in the
//! input splits the whole input into operands, which are parsed recursively.
//! There is no precedence and there are no parentheses: `1 * 2 + 3` is
//! `1 * 2` plus `3`, while `1 + 2 * 3` is `1` plus `2 * 3`, and
//! `2 * 3 - 1` is `2 * 3` minus `1`.
//!
//! A `+` or `-` at the start of an operand, or right after another
//! operator, is a sign rather than an operator: `-7 / 2` divides `-7` by `2`
//! and `2 * -4` multiplies `2` by `-4`.
//!
//! Operators are expected to be written with whitespace on both sides.
//! The parser does not enforce this, and unusual spacing around signs can
//! produce a different split.

use super::arithmetic::Operator;
use super::error::ParseError;
use super::expression::Expression;
use super::factory::{CoreFactory, ExpressionFactory};

/// Turns formula text into an expression tree.
pub trait Parser {
    fn parse(&self, input: &str) -> Result<Expression, ParseError>;
}

/// Parser for the core formula language, building nodes through `F`.
#[derive(Clone, Debug)]
pub struct SimpleParser<F = CoreFactory> {
    factory: F,
}

impl Default for SimpleParser {
    fn default() -> Self {
        SimpleParser::new(CoreFactory)
    }
}

impl<F: ExpressionFactory> SimpleParser<F> {
    pub fn new(factory: F) -> Self {
        SimpleParser { factory }
    }

    /// Parse a token that contains no operator: an integer or an identifier.
    fn parse_token(&self, token: &str) -> Result<Expression, ParseError> {
        if let Ok(value) = token.parse::<i64>() {
            return Ok(self.factory.create_constant(value));
        }
        if !token.is_empty() && token.chars().all(char::is_alphanumeric) {
            return Ok(self.factory.create_reference(token));
        }
        Err(ParseError::InvalidToken(token.to_string()))
    }
}

impl<F: ExpressionFactory> Parser for SimpleParser<F> {
    fn parse(&self, input: &str) -> Result<Expression, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(self.factory.create_empty());
        }

        for operator in Operator::SCAN_ORDER {
            let pieces = split_operands(input, operator.symbol());
            if pieces.len() < 2 {
                continue;
            }
            // A dangling operator such as `4 +` leaves nothing to parse as an operand.
            if pieces.iter().any(|piece| piece.is_empty()) {
                return self.parse_token(input);
            }
            let operands = pieces
                .into_iter()
                .map(|piece| self.parse(piece))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(self
                .factory
                .create_operator(&operator.to_string(), operands)?);
        }

        self.parse_token(input)
    }
}

/// Split `input` at every operator occurrence of `symbol`, trimming each piece.
fn split_operands(input: &str, symbol: char) -> Vec<&str> {
    let may_be_sign = matches!(symbol, '+' | '-');
    let mut pieces = Vec::new();
    let mut start = 0;

    for (i, c) in input.char_indices() {
        if c != symbol {
            continue;
        }
        let piece = input[start..i].trim();
        if may_be_sign && (piece.is_empty() || ends_with_operator(piece)) {
            continue;
        }
        pieces.push(piece);
        start = i + c.len_utf8();
    }
    pieces.push(input[start..].trim());

    pieces
}

fn ends_with_operator(text: &str) -> bool {
    text.chars()
        .next_back()
        .is_some_and(|c| Operator::from_symbol(c).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Context, EvalError, InvalidExpression};
    use proptest::prelude::*;

    fn parse(input: &str) -> Expression {
        SimpleParser::default().parse(input).unwrap()
    }

    fn eval(input: &str) -> Result<Expression, EvalError> {
        parse(input).evaluate(&Context::new())
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert_eq!(parse(""), Expression::Empty);
        assert_eq!(parse("   "), Expression::Empty);
    }

    #[test]
    fn test_tokens() {
        assert_eq!(parse(" 42 "), Expression::Constant(42));
        assert_eq!(parse("-7"), Expression::Constant(-7));
        assert_eq!(parse("+5"), Expression::Constant(5));
        assert_eq!(parse("life"), Expression::Reference("life".to_string()));
        assert_eq!(parse("B12"), Expression::Reference("B12".to_string()));
    }

    #[test]
    fn test_invalid_token() {
        let parser = SimpleParser::default();
        assert_eq!(
            parser.parse("a.b"),
            Err(ParseError::InvalidToken("a.b".to_string()))
        );
        assert_eq!(
            parser.parse("two words"),
            Err(ParseError::InvalidToken("two words".to_string()))
        );
    }

    #[test]
    fn test_dangling_operator_fails() {
        let parser = SimpleParser::default();
        assert_eq!(parser.parse("4+"), Err(ParseError::InvalidToken("4+".to_string())));
        assert!(parser.parse("4 = ").is_err());
        assert!(parser.parse("< 4").is_err());
        assert!(parser.parse("1 * * 2").is_err());
    }

    #[test]
    fn test_nary_split() {
        let expr = parse("A1 + A2 + 3");
        let Expression::Arithmetic(arithmetic) = &expr else {
            panic!("expected operator, got {:?}", expr);
        };
        assert_eq!(arithmetic.operator(), Operator::Plus);
        assert_eq!(arithmetic.operands().len(), 3);
        assert_eq!(expr.render(), "A1 + A2 + 3");
    }

    #[test]
    fn test_scan_order_ignores_precedence() {
        // `+` is scanned before `*`, so this is 1 + (2 * 3).
        assert_eq!(eval("1 + 2 * 3"), Ok(Expression::Constant(7)));
        // `-` is scanned before `*`, so this is (2 * 3) - 1.
        assert_eq!(eval("2 * 3 - 1"), Ok(Expression::Constant(5)));
        // `+` before `-`: 10 + (1 - 5).
        assert_eq!(eval("10 + 1 - 5"), Ok(Expression::Constant(6)));
        // `=` splits first: (1 + 1) = 2.
        assert_eq!(eval("1 + 1 = 2"), Ok(Expression::Constant(1)));
    }

    #[test]
    fn test_division() {
        assert_eq!(eval("10 / 3").and_then(|e| e.value()), Ok(3));
        assert_eq!(eval("-7 / 2").and_then(|e| e.value()), Ok(-3));
        assert_eq!(eval("1 / 0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_signed_operands() {
        assert_eq!(eval("5 - -3"), Ok(Expression::Constant(8)));
        assert_eq!(eval("-1 - 2"), Ok(Expression::Constant(-3)));
        assert_eq!(eval("2 * -4"), Ok(Expression::Constant(-8)));
        assert_eq!(eval("1 * -2 - 3"), Ok(Expression::Constant(-5)));
        assert_eq!(eval("3 * +2"), Ok(Expression::Constant(6)));
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(eval("1 < 2 < 3"), Ok(Expression::Constant(1)));
        assert_eq!(eval("1 < 3 < 2"), Ok(Expression::Constant(0)));
        assert_eq!(eval("4 = 4 = 4"), Ok(Expression::Constant(1)));
        assert_eq!(eval("4 = 4 = 5"), Ok(Expression::Constant(0)));
    }

    #[test]
    fn test_factory_errors_surface_as_parse_errors() {
        struct NoDivide;

        impl ExpressionFactory for NoDivide {
            fn create_reference(&self, identifier: &str) -> Expression {
                CoreFactory.create_reference(identifier)
            }
            fn create_constant(&self, value: i64) -> Expression {
                CoreFactory.create_constant(value)
            }
            fn create_empty(&self) -> Expression {
                CoreFactory.create_empty()
            }
            fn create_operator(
                &self,
                name: &str,
                args: Vec<Expression>,
            ) -> Result<Expression, InvalidExpression> {
                if name == "/" {
                    return Err(InvalidExpression::UnknownOperator(name.to_string()));
                }
                CoreFactory.create_operator(name, args)
            }
        }

        let parser = SimpleParser::new(NoDivide);
        assert_eq!(
            parser.parse("4 / 2"),
            Err(ParseError::InvalidExpression(InvalidExpression::UnknownOperator(
                "/".to_string()
            )))
        );
        assert!(parser.parse("4 * 2").is_ok());
    }

    fn constant_expression() -> impl Strategy<Value = Expression> {
        let leaf = any::<i64>().prop_map(Expression::Constant);
        leaf.prop_recursive(4, 32, 4, |inner| {
            (
                proptest::sample::select(Operator::SCAN_ORDER.to_vec()),
                proptest::collection::vec(inner, 1..4),
            )
                .prop_map(|(operator, operands)| {
                    crate::engine::Arithmetic::new(operator, operands)
                        .expect("operands are non-empty")
                        .into()
                })
        })
    }

    proptest! {
        #[test]
        fn prop_render_parse_render_is_stable(expr in constant_expression()) {
            let rendered = expr.render();
            let reparsed = SimpleParser::default().parse(&rendered).unwrap();
            prop_assert_eq!(reparsed.render(), rendered);
        }
    }
}
