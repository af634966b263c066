//! Argument tokenizer.
//!
//! Splits an argument string like `foo=bar,bar2 baz="fuz wiz" quiet` into
//! `(name, value)` pairs. Tokens are separated by whitespace; a double quote
//! starts a span in which whitespace does not end the token. Quotes cannot
//! be escaped. A token without `=` yields no value.
//!
//! The input is only borrowed: every pair is a pair of slices into it, so
//! the same string can be tokenized again.

/// Whitespace as the C locale defines it, vertical tab included.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

pub fn skip_spaces(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_ascii() && is_space(c as u8))
}

fn dash_to_underscore(b: u8) -> u8 {
    if b == b'-' {
        b'_'
    } else {
        b
    }
}

/// Compare an input name against a registered one. Hyphens in the input
/// match underscores in the registered name; nothing else is normalized.
pub fn param_eq(input: &str, name: &str) -> bool {
    input.len() == name.len()
        && input
            .bytes()
            .zip(name.bytes())
            .all(|(a, b)| dash_to_underscore(a) == b)
}

/// Lazy sequence of `(name, value)` pairs over an argument string.
#[derive(Debug, Clone)]
pub struct Tokenizer<'s> {
    rest: &'s str,
}

impl<'s> Tokenizer<'s> {
    pub fn new(args: &'s str) -> Self {
        Self {
            rest: skip_spaces(args),
        }
    }
}

impl<'s> Iterator for Tokenizer<'s> {
    type Item = (&'s str, Option<&'s str>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (pair, next) = next_arg(self.rest);
        self.rest = skip_spaces(next);
        Some(pair)
    }
}

/// Split one token off the front of `args`, returning the pair and the
/// unconsumed remainder.
fn next_arg(args: &str) -> ((&str, Option<&str>), &str) {
    let (args, quoted) = match args.strip_prefix('"') {
        Some(rest) => (rest, true),
        None => (args, false),
    };

    let bytes = args.as_bytes();
    let mut in_quote = quoted;
    let mut equals = None;
    let mut end = bytes.len();

    for (i, &b) in bytes.iter().enumerate() {
        if is_space(b) && !in_quote {
            end = i;
            break;
        }
        // A leading '=' never splits the token.
        if equals.is_none() && i > 0 && b == b'=' {
            equals = Some(i);
        }
        if b == b'"' {
            in_quote = !in_quote;
        }
    }

    let pair = match equals {
        None => (&args[..end], None),
        Some(eq) => {
            let closing_quote = bytes[end - 1] == b'"';
            let mut start = eq + 1;
            let mut stop = end;

            if start < end && bytes[start] == b'"' {
                start += 1;
                if closing_quote {
                    stop = end - 1;
                }
            }
            if quoted && closing_quote {
                stop = end - 1;
            }

            (&args[..eq], Some(&args[start..stop.max(start)]))
        }
    };

    let next = if end < bytes.len() {
        &args[end + 1..]
    } else {
        &args[end..]
    };
    (pair, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pairs(args: &str) -> Vec<(&str, Option<&str>)> {
        Tokenizer::new(args).collect()
    }

    #[test]
    fn test_basic_pairs() {
        assert_eq!(
            pairs(r#"foo=bar wiz="a b c" baz"#),
            vec![("foo", Some("bar")), ("wiz", Some("a b c")), ("baz", None)]
        );
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(
            pairs("  \ta=1 \n\x0b b=2  "),
            vec![("a", Some("1")), ("b", Some("2"))]
        );
        assert!(pairs("").is_empty());
        assert!(pairs("   ").is_empty());
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(pairs("a= b"), vec![("a", Some("")), ("b", None)]);
        assert_eq!(pairs(r#"a="""#), vec![("a", Some(""))]);
        assert_eq!(pairs(r#"a=""#), vec![("a", Some(""))]);
    }

    #[test]
    fn test_commas_stay_in_value() {
        assert_eq!(pairs("nums=1,2,3"), vec![("nums", Some("1,2,3"))]);
    }

    #[test]
    fn test_only_first_equals_splits() {
        assert_eq!(pairs("a=b=c"), vec![("a", Some("b=c"))]);
    }

    #[test]
    fn test_leading_equals_does_not_split() {
        assert_eq!(pairs("=x"), vec![("=x", None)]);
        assert_eq!(pairs("=x=y"), vec![("=x", Some("y"))]);
    }

    #[test]
    fn test_fully_quoted_token() {
        assert_eq!(
            pairs(r#""name=two words" next"#),
            vec![("name", Some("two words")), ("next", None)]
        );
    }

    #[test]
    fn test_quote_inside_value() {
        assert_eq!(
            pairs(r#"msg=say" hi" x"#),
            vec![("msg", Some(r#"say" hi""#)), ("x", None)]
        );
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(pairs(r#"a="x y z"#), vec![("a", Some("x y z"))]);
    }

    #[test]
    fn test_input_is_not_consumed_by_tokenizing() {
        let args = String::from("a=1 b");
        let first: Vec<_> = Tokenizer::new(&args).collect();
        let second: Vec<_> = Tokenizer::new(&args).collect();
        assert_eq!(first, second);
        assert_eq!(args, "a=1 b");
    }

    #[test]
    fn test_param_eq_normalizes_input_hyphens() {
        assert!(param_eq("my-opt", "my_opt"));
        assert!(param_eq("my_opt", "my_opt"));
        assert!(!param_eq("my_opt", "my-opt"));
        assert!(!param_eq("my-op", "my_opt"));
        assert!(!param_eq("My_opt", "my_opt"));
    }

    proptest! {
        #[test]
        fn every_token_consumes_input(args in r#"[a-z=" \t,_-]{0,64}"#) {
            prop_assert!(Tokenizer::new(&args).count() <= args.len());
        }

        #[test]
        fn pairs_borrow_from_input(args in r#"[a-z=" ,_-]{0,64}"#) {
            for (name, value) in Tokenizer::new(&args) {
                prop_assert!(args.contains(name));
                if let Some(value) = value {
                    prop_assert!(args.contains(value));
                }
            }
        }
    }
}
