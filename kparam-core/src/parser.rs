//! Parse driver.
//!
//! Joins the argument vector into one string, tokenizes it and feeds each
//! pair to the matching parameter. Parsing is fail-fast: the first error
//! stops the loop and is returned with the offending name and value.

use tracing::debug;

use crate::error::{ErrorKind, Result};
use crate::registry::ParamRegistry;
use crate::tokenizer::Tokenizer;

/// Handler for names that do not resolve. Returning
/// `Err(ErrorKind::UnknownParameter)` rejects the name.
pub type Fallback<'f> = &'f mut dyn FnMut(&str, Option<&str>) -> std::result::Result<(), ErrorKind>;

impl ParamRegistry<'_> {
    /// Parse `argv`, stopping at the first failure.
    ///
    /// Arguments are joined with single spaces before tokenizing, so one
    /// element may carry several tokens and a quoted value may span
    /// elements.
    pub fn parse<S: AsRef<str>>(&mut self, argv: &[S], fallback: Option<Fallback<'_>>) -> Result<()> {
        let args = argv.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ");
        self.parse_str(&args, fallback)
    }

    /// Parse an already joined argument string.
    pub fn parse_str(&mut self, args: &str, mut fallback: Option<Fallback<'_>>) -> Result<()> {
        debug!("Parsing ARGS: {}", args);

        for (name, value) in Tokenizer::new(args) {
            if let Err(kind) = self.parse_one(name, value, &mut fallback) {
                let err = kind.with_context(name, value);
                debug!("{}", err);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Status-code flavour of [`parse`](Self::parse): `0` on success,
    /// otherwise the negative errno of the first failure.
    pub fn parse_status<S: AsRef<str>>(&mut self, argv: &[S], fallback: Option<Fallback<'_>>) -> i32 {
        match self.parse(argv, fallback) {
            Ok(()) => 0,
            Err(err) => err.code(),
        }
    }

    fn parse_one(
        &mut self,
        name: &str,
        value: Option<&str>,
        fallback: &mut Option<Fallback<'_>>,
    ) -> std::result::Result<(), ErrorKind> {
        if let Some(param) = self.resolve_mut(name) {
            debug!("Setting '{}' ({})", param.name(), param.type_name());
            return param.set(value);
        }

        match fallback.as_deref_mut() {
            Some(handler) => {
                debug!("Unknown argument '{}': calling fallback", name);
                handler(name, value)
            }
            None => Err(ErrorKind::UnknownParameter),
        }
    }
}
