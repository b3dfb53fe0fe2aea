//! Filter-expression parser.
//!
//! Grammar, whitespace-free:
//!
//! ```text
//! expression  := operand? ( "|" name ( ":" operand )? )*
//! operand     := "_(" literal ")" | literal | bare
//! literal     := '"' ( [^"\\] | "\" any )* '"' | "'" ( [^'\\] | "\" any )* "'"
//! bare        := [+-]? [\w.]+          (sign only in front of a digit)
//! name        := \w+
//! ```
//!
//! The whole fragment must be consumed. Escapes inside literals are kept
//! verbatim.

use super::error::{FilterParseError, FilterParseReason};
use super::smart_split::{closing_quote_end, is_quote};

pub const FILTER_SEPARATOR: char = '|';
pub const FILTER_ARGUMENT_SEPARATOR: char = ':';
pub const TRANSLATION_OPEN: &str = "_(";
pub const TRANSLATION_CLOSE: char = ')';

/// A complete quoted literal, quotes included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotedLiteral<'a> {
    raw: &'a str,
}

impl<'a> QuotedLiteral<'a> {
    /// Accepts `raw` only if it is exactly one quoted literal.
    pub fn parse(raw: &'a str) -> Option<Self> {
        match closing_quote_end(raw, 0) {
            Some(end) if end == raw.len() => Some(Self { raw }),
            _ => None,
        }
    }

    /// Text between the quotes, escapes untouched.
    pub fn inner(&self) -> &'a str {
        &self.raw[1..self.raw.len() - 1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    /// `"text"` or `'text'`
    Literal(QuotedLiteral<'a>),
    /// `_("text")`
    Translation(QuotedLiteral<'a>),
    /// Variable lookup or number: `user.name`, `42`, `-1.5`
    Variable(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCall<'a> {
    pub name: &'a str,
    pub argument: Option<Operand<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpression<'a> {
    pub value: Option<Operand<'a>>,
    pub filters: Vec<FilterCall<'a>>,
}

impl<'a> FilterExpression<'a> {
    pub fn parse(fragment: &'a str) -> Result<Self, FilterParseError> {
        Parser {
            text: fragment,
            pos: 0,
        }
        .parse_expression()
    }

    /// Literals wrapped in `_()`, in source order.
    pub fn translations(&self) -> impl Iterator<Item = &QuotedLiteral<'a>> {
        self.value
            .iter()
            .chain(self.filters.iter().filter_map(|f| f.argument.as_ref()))
            .filter_map(|operand| match operand {
                Operand::Translation(literal) => Some(literal),
                Operand::Literal(_) | Operand::Variable(_) => None,
            })
    }
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn error(&self, reason: FilterParseReason) -> FilterParseError {
        FilterParseError {
            position: self.pos,
            reason,
        }
    }

    fn parse_expression(mut self) -> Result<FilterExpression<'a>, FilterParseError> {
        let value = match self.peek() {
            None | Some(FILTER_SEPARATOR) => None,
            Some(_) => Some(self.parse_operand()?),
        };

        let mut filters = Vec::new();
        while let Some(c) = self.peek() {
            if c != FILTER_SEPARATOR {
                return Err(self.error(FilterParseReason::UnexpectedInput(self.rest().to_string())));
            }
            self.pos += c.len_utf8();

            let name = self.take_while(is_word_char);
            if name.is_empty() {
                return Err(self.error(FilterParseReason::MissingFilterName));
            }

            let argument = if self.eat(FILTER_ARGUMENT_SEPARATOR) {
                Some(self.parse_operand()?)
            } else {
                None
            };
            filters.push(FilterCall { name, argument });
        }

        Ok(FilterExpression { value, filters })
    }

    fn parse_operand(&mut self) -> Result<Operand<'a>, FilterParseError> {
        if self.rest().starts_with(TRANSLATION_OPEN) {
            self.pos += TRANSLATION_OPEN.len();
            if !self.peek().is_some_and(is_quote) {
                return Err(self.error(FilterParseReason::TranslationWithoutLiteral));
            }
            let literal = self.parse_literal()?;
            if !self.eat(TRANSLATION_CLOSE) {
                return Err(self.error(FilterParseReason::UnclosedTranslation));
            }
            return Ok(Operand::Translation(literal));
        }

        if self.peek().is_some_and(is_quote) {
            return self.parse_literal().map(Operand::Literal);
        }

        let start = self.pos;
        let mut chars = self.rest().chars();
        if let (Some(sign @ ('-' | '+')), Some(next)) = (chars.next(), chars.next())
            && next.is_ascii_digit()
        {
            self.pos += sign.len_utf8();
        }
        self.take_while(|c| is_word_char(c) || c == '.');

        if self.pos == start {
            return Err(match self.peek() {
                None => self.error(FilterParseReason::MissingFilterArgument),
                Some(_) => self.error(FilterParseReason::UnexpectedInput(self.rest().to_string())),
            });
        }
        Ok(Operand::Variable(&self.text[start..self.pos]))
    }

    fn parse_literal(&mut self) -> Result<QuotedLiteral<'a>, FilterParseError> {
        let start = self.pos;
        let end = closing_quote_end(self.text, start)
            .ok_or_else(|| self.error(FilterParseReason::UnclosedLiteral))?;
        self.pos = end;
        Ok(QuotedLiteral {
            raw: &self.text[start..end],
        })
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest
            .char_indices()
            .find(|(_, c)| !pred(*c))
            .map_or(rest.len(), |(i, _)| i);
        self.pos += len;
        &rest[..len]
    }
}

fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn translations(fragment: &str) -> Vec<&str> {
        FilterExpression::parse(fragment)
            .unwrap()
            .translations()
            .map(|l| l.inner())
            .collect()
    }

    fn reason(fragment: &str) -> FilterParseReason {
        FilterExpression::parse(fragment).unwrap_err().reason
    }

    #[test]
    fn test_translated_value() {
        assert_eq!(translations(r#"_("hello")|upper"#), vec!["hello"]);
    }

    #[test]
    fn test_translated_argument() {
        assert_eq!(translations(r#"list|join:_("and")"#), vec!["and"]);
    }

    #[test]
    fn test_translated_value_and_arguments() {
        assert_eq!(
            translations(r#"_('a')|cut:_("b")|default:'c'|join:_('d')"#),
            vec!["a", "b", "d"]
        );
    }

    #[test]
    fn test_plain_literals_are_not_translations() {
        assert!(translations(r#""hello"|upper"#).is_empty());
        assert!(translations(r#"value|default:"n/a""#).is_empty());
    }

    #[test]
    fn test_escapes_are_left_verbatim() {
        assert_eq!(translations(r#"_("say \"hi\"")"#), vec![r#"say \"hi\""#]);
        assert_eq!(translations(r"_('it\'s')"), vec![r"it\'s"]);
    }

    #[test]
    fn test_structure() {
        let expr = FilterExpression::parse(r#"user.name|truncate:10|default:_("Anonymous")"#).unwrap();
        assert_eq!(expr.value, Some(Operand::Variable("user.name")));
        assert_eq!(expr.filters.len(), 2);
        assert_eq!(expr.filters[0].name, "truncate");
        assert_eq!(expr.filters[0].argument, Some(Operand::Variable("10")));
        assert_eq!(expr.filters[1].name, "default");
        assert!(matches!(
            expr.filters[1].argument,
            Some(Operand::Translation(lit)) if lit.inner() == "Anonymous"
        ));
    }

    #[test]
    fn test_signed_numbers() {
        let expr = FilterExpression::parse("value|add:-3").unwrap();
        assert_eq!(expr.filters[0].argument, Some(Operand::Variable("-3")));
        assert_eq!(
            reason("value|add:-x"),
            FilterParseReason::UnexpectedInput("-x".to_string())
        );
    }

    #[test]
    fn test_empty_and_filter_only_expressions() {
        let empty = FilterExpression::parse("").unwrap();
        assert_eq!(empty.value, None);
        assert!(empty.filters.is_empty());

        let filter_only = FilterExpression::parse("|upper").unwrap();
        assert_eq!(filter_only.value, None);
        assert_eq!(filter_only.filters[0].name, "upper");
    }

    #[test]
    fn test_mismatched_quotes_are_rejected() {
        assert_eq!(reason(r#"_("open')"#), FilterParseReason::UnclosedLiteral);
        assert_eq!(reason(r#"x|join:_('open")"#), FilterParseReason::UnclosedLiteral);
    }

    #[test]
    fn test_leftover_text_is_rejected() {
        let err = FilterExpression::parse(r#"_("a") b"#).unwrap_err();
        assert_eq!(err.position, 6);
        assert_eq!(err.reason, FilterParseReason::UnexpectedInput(" b".to_string()));

        assert_eq!(reason("a == b"), FilterParseReason::UnexpectedInput(" == b".to_string()));
    }

    #[test]
    fn test_broken_translation_calls() {
        assert_eq!(reason("_(name)"), FilterParseReason::TranslationWithoutLiteral);
        assert_eq!(reason(r#"_("a""#), FilterParseReason::UnclosedTranslation);
    }

    #[test]
    fn test_broken_filters() {
        assert_eq!(reason("value|"), FilterParseReason::MissingFilterName);
        assert_eq!(reason("value|:x"), FilterParseReason::MissingFilterName);
        assert_eq!(reason("value|join:"), FilterParseReason::MissingFilterArgument);
    }

    #[test]
    fn test_quoted_literal_parse() {
        assert_eq!(QuotedLiteral::parse(r#""a b""#).map(|l| l.inner()), Some("a b"));
        assert_eq!(QuotedLiteral::parse("''").map(|l| l.inner()), Some(""));
        assert_eq!(QuotedLiteral::parse("'x\\'y'").map(|l| l.inner()), Some("x\\'y"));
        assert!(QuotedLiteral::parse(r#""a"b""#).is_none());
        assert!(QuotedLiteral::parse(r#""a'"#).is_none());
        assert!(QuotedLiteral::parse("\"").is_none());
        assert!(QuotedLiteral::parse("var").is_none());
    }
}
