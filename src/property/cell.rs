//! Lazily resolved configuration cells
//!
//! A [`Property`] holds either an explicitly assigned value or a pending
//! convention (a lazy default supplier). Explicit assignment always wins
//! over the convention, no matter in which order reads and writes happen.

use crate::error::{MojoconfError, Result};
use std::cell::RefCell;
use std::fmt;
use tracing::debug;

/// Lazy default supplier for a configuration cell.
///
/// Suppliers may fail (e.g. when the host project state they read from is
/// incomplete); the failure propagates unchanged to the caller of
/// [`Property::get`]. A supplier returning `Ok(None)` means the convention
/// legitimately yields no value.
pub type Supplier<T> = Box<dyn Fn() -> Result<Option<T>>>;

/// A single named, typed configuration cell.
///
/// The cell is in one of three conditions: unset with a pending convention,
/// convention-resolved (the supplier ran once and its result is memoized),
/// or explicitly set. There are no transitions back; the convention supplier
/// is never invoked again once an explicit value is assigned.
pub struct Property<T: Clone + 'static> {
    name: String,
    explicit: Option<T>,
    convention: Option<Supplier<T>>,
    // Memoized convention result; single-threaded access only.
    resolved: RefCell<Option<Option<T>>>,
}

impl<T: Clone + 'static> Property<T> {
    /// Create a cell with no convention; reads yield `None` until a value is set.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            explicit: None,
            convention: None,
            resolved: RefCell::new(None),
        }
    }

    /// Create a cell whose default is computed lazily by `supplier`.
    pub fn with_convention<S, F>(name: S, supplier: F) -> Self
    where
        S: Into<String>,
        F: Fn() -> Result<Option<T>> + 'static,
    {
        Self {
            name: name.into(),
            explicit: None,
            convention: Some(Box::new(supplier)),
            resolved: RefCell::new(None),
        }
    }

    /// Create a cell whose default is a fixed value.
    pub fn with_default<S: Into<String>>(name: S, value: T) -> Self {
        Self::with_convention(name, move || Ok(Some(value.clone())))
    }

    /// Cell name, used in error messages and logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assign an explicit value, permanently overriding the convention.
    pub fn set(&mut self, value: T) {
        debug!("Property '{}' set explicitly", self.name);
        self.explicit = Some(value);
    }

    /// Replace the convention supplier.
    ///
    /// Has no effect once an explicit value has been assigned. Installing a
    /// new supplier discards a previously memoized convention result.
    pub fn set_convention<F>(&mut self, supplier: F)
    where
        F: Fn() -> Result<Option<T>> + 'static,
    {
        if self.explicit.is_some() {
            debug!(
                "Ignoring convention for property '{}': explicit value already set",
                self.name
            );
            return;
        }
        self.convention = Some(Box::new(supplier));
        *self.resolved.borrow_mut() = None;
    }

    /// Resolve the cell: the explicit value if set, else the memoized
    /// convention result, evaluating the supplier on first read.
    pub fn get(&self) -> Result<Option<T>> {
        if let Some(value) = &self.explicit {
            return Ok(Some(value.clone()));
        }

        if let Some(cached) = self.resolved.borrow().as_ref() {
            return Ok(cached.clone());
        }

        let value = match &self.convention {
            Some(supplier) => {
                debug!("Resolving convention for property '{}'", self.name);
                supplier()?
            }
            None => None,
        };

        *self.resolved.borrow_mut() = Some(value.clone());
        Ok(value)
    }

    /// Resolve the cell, substituting `default` when it yields no value.
    pub fn get_or_else(&self, default: T) -> Result<T> {
        Ok(self.get()?.unwrap_or(default))
    }

    /// Resolve the cell, failing with [`MojoconfError::MissingValue`] when it
    /// yields no value.
    pub fn get_required(&self) -> Result<T> {
        self.get()?
            .ok_or_else(|| MojoconfError::missing_value(self.name.clone()))
    }

    /// Whether the cell currently resolves to a value.
    pub fn is_present(&self) -> Result<bool> {
        Ok(self.get()?.is_some())
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("explicit", &self.explicit)
            .field("has_convention", &self.convention.is_some())
            .finish()
    }
}
