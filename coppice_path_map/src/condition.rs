// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility conditions: lazily evaluated, type-erased boolean capabilities.

use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

/// A boolean visibility condition for one position of the static hierarchy.
///
/// A condition is something that can be asked "is this position active right
/// now?". Evaluation is always lazy: nothing runs at registration time, and
/// results are never cached — a condition is free to read external mutable
/// state and answer differently on every call. A position with *no*
/// registered condition is implicitly always active.
///
/// The storage and traversal layers are oblivious to which variant a
/// condition holds; everything funnels through [`Condition::evaluate`].
pub struct Condition {
    kind: Kind,
}

enum Kind {
    Constant(bool),
    Closure(Box<dyn Fn() -> bool>),
    Predicate {
        subject: Box<dyn Any>,
        predicate: Box<dyn Fn(&dyn Any) -> bool>,
    },
}

impl Condition {
    /// A condition with a fixed outcome.
    #[must_use]
    pub fn always(active: bool) -> Self {
        Self {
            kind: Kind::Constant(active),
        }
    }

    /// A condition evaluated by calling `f`.
    ///
    /// `f` should return `true` while the position is active and `false`
    /// while it should be skipped.
    #[must_use]
    pub fn closure(f: impl Fn() -> bool + 'static) -> Self {
        Self {
            kind: Kind::Closure(Box::new(f)),
        }
    }

    /// A predicate bound to the subject it is evaluated on.
    ///
    /// The condition takes ownership of `subject`; each evaluation runs
    /// `predicate` against it. This is the declarative counterpart of
    /// [`Condition::closure`] for hosts that keep their state in a model
    /// object rather than in captured variables.
    #[must_use]
    pub fn predicate<T: 'static>(subject: T, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        let erased = move |subject: &dyn Any| {
            let subject = subject
                .downcast_ref::<T>()
                .expect("subject stored with its predicate's type");
            predicate(subject)
        };
        Self {
            kind: Kind::Predicate {
                subject: Box::new(subject),
                predicate: Box::new(erased),
            },
        }
    }

    /// Evaluates the condition; `true` means the position is active.
    #[must_use]
    pub fn evaluate(&self) -> bool {
        match &self.kind {
            Kind::Constant(active) => *active,
            Kind::Closure(f) => f(),
            Kind::Predicate { subject, predicate } => predicate(subject.as_ref()),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            Kind::Constant(active) => write!(f, "Condition::Always({active})"),
            Kind::Closure(_) => f.write_str("Condition::Closure"),
            Kind::Predicate { .. } => f.write_str("Condition::Predicate"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use super::Condition;

    #[test]
    fn constants_have_a_fixed_outcome() {
        assert!(Condition::always(true).evaluate());
        assert!(!Condition::always(false).evaluate());
    }

    #[test]
    fn closures_observe_external_state() {
        let enabled = Rc::new(Cell::new(false));
        let observed = enabled.clone();
        let condition = Condition::closure(move || observed.get());

        assert!(!condition.evaluate());
        enabled.set(true);
        assert!(condition.evaluate());
    }

    #[test]
    fn predicates_run_against_their_subject() {
        struct Settings {
            verbosity: u8,
        }

        let condition = Condition::predicate(Settings { verbosity: 3 }, |s| s.verbosity > 1);
        assert!(condition.evaluate());

        let condition = Condition::predicate(Settings { verbosity: 0 }, |s| s.verbosity > 1);
        assert!(!condition.evaluate());
    }

    #[test]
    fn registration_does_not_evaluate() {
        let calls = Rc::new(Cell::new(0_u32));
        let counted = calls.clone();
        let condition = Condition::closure(move || {
            counted.set(counted.get() + 1);
            true
        });

        assert_eq!(calls.get(), 0, "conditions must be lazy");
        let _ = condition.evaluate();
        assert_eq!(calls.get(), 1);
    }
}
