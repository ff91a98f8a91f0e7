//! Name → constructor mapping for rebuilding kernels from storage
//!
//! A kernel only reports its class name; the registry owns the mapping from
//! that name back to a constructor reading a [`ParameterStore`].

use crate::persistence::{ParameterStore, CLASS_KEY};
use crate::traits::CovarianceKernel;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;
use tracing::debug;

/// A boxed `f64` kernel, the unit a registry hands back
pub type BoxedKernel = Box<dyn CovarianceKernel<f64>>;

/// Rebuilds one kernel class from its stored parameters
pub type KernelConstructor = fn(&dyn ParameterStore) -> Result<BoxedKernel>;

/// Thread-safe registry of kernel constructors
#[derive(Default)]
pub struct KernelRegistry {
    constructors: RwLock<HashMap<&'static str, KernelConstructor>>,
}

impl fmt::Debug for KernelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KernelRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl KernelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `constructor` under `name`, replacing any previous entry
    ///
    /// Returns `true` if the name was already registered.
    pub fn register(&self, name: &'static str, constructor: KernelConstructor) -> bool {
        let mut map = self
            .constructors
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let replaced = map.insert(name, constructor).is_some();
        debug!(name, replaced, "Registered kernel constructor");
        replaced
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Registered class names in sorted order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.read().keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Rebuild the kernel described by `store`
    ///
    /// The class is read from the `class` key.
    pub fn load(&self, store: &dyn ParameterStore) -> Result<BoxedKernel> {
        let class = store.load_text(CLASS_KEY)?;
        let constructor = self
            .read()
            .get(class.as_str())
            .copied()
            .ok_or_else(|| Error::UnknownKernel(class.clone()))?;
        debug!(class = class.as_str(), "Loading kernel from store");
        constructor(store)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<&'static str, KernelConstructor>> {
        self.constructors
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
