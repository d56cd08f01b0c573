//! Guard predicates for choosing between candidate transitions.
//!
//! Guards are pure boolean functions over the entity. They are evaluated
//! against the live entity every time a command is resolved and are never
//! cached.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over an entity that decides whether a candidate applies.
///
/// Guards are cheap to clone: the predicate is shared behind an `Arc`, so a
/// single guard can be attached to several rules.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Guard;
///
/// struct Order {
///     total: u32,
/// }
///
/// let large = Guard::named("large_order", |o: &Order| o.total > 1_000);
///
/// assert!(large.check(&Order { total: 5_000 }));
/// assert!(!large.check(&Order { total: 10 }));
/// assert_eq!(large.label(), "large_order");
/// ```
pub struct Guard<E> {
    label: Option<String>,
    predicate: Arc<dyn Fn(&E) -> bool + Send + Sync>,
}

impl<E> Guard<E> {
    /// Create an unlabelled guard from a pure predicate.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Guard {
            label: None,
            predicate: Arc::new(predicate),
        }
    }

    /// Create a guard with a label used in error messages and table
    /// descriptions.
    pub fn named<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Guard {
            label: Some(label.into()),
            predicate: Arc::new(predicate),
        }
    }

    /// Check whether the guard holds for this entity.
    pub fn check(&self, entity: &E) -> bool {
        (self.predicate)(entity)
    }

    /// Label of the guard, or `"<anonymous>"` if none was given.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("<anonymous>")
    }
}

impl<E> Clone for Guard<E> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<E> fmt::Debug for Guard<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("label", &self.label()).finish()
    }
}
