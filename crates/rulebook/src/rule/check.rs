//! One attached predicate plus its modifiers

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::foundation::{Validate, ValidationError};
use crate::options::ValidationOptions;

pub(crate) type Condition<M> = Box<dyn Fn(&M) -> bool + Send + Sync>;

/// A predicate attached to a rule, with the overrides applied to it by
/// `with_message`, `with_error_code`, `when` and `tag`.
pub(crate) struct Check<M, V> {
    predicate: Box<dyn Validate<Input = V> + Send + Sync>,
    pub(crate) message: Option<Cow<'static, str>>,
    pub(crate) code: Option<Cow<'static, str>>,
    pub(crate) condition: Option<Condition<M>>,
    pub(crate) tags: SmallVec<[Cow<'static, str>; 2]>,
}

impl<M, V> Check<M, V> {
    pub(crate) fn new<P>(predicate: P) -> Self
    where
        P: Validate<Input = V> + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            message: None,
            code: None,
            condition: None,
            tags: SmallVec::new(),
        }
    }

    /// Whether this check runs for `model` under `options`.
    pub(crate) fn applies(&self, model: &M, options: &ValidationOptions) -> bool {
        options.selects(&self.tags) && self.condition.as_ref().is_none_or(|cond| cond(model))
    }

    /// Runs the predicate, replacing code and message when overridden.
    pub(crate) fn run(&self, value: &V) -> Result<(), ValidationError> {
        self.predicate.validate(value).map_err(|mut error| {
            if let Some(code) = &self.code {
                error.code = code.clone();
            }
            if let Some(message) = &self.message {
                error.message = message.clone();
            }
            error
        })
    }
}

impl<M, V> fmt::Debug for Check<M, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("predicate", &"<predicate>")
            .field("message", &self.message)
            .field("code", &self.code)
            .field("conditional", &self.condition.is_some())
            .field("tags", &self.tags)
            .finish()
    }
}
