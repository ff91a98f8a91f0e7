//! Process-wide registry of the built-in kernels
//!
//! The registry is populated on first use and can be extended with
//! additional classes through [`KernelRegistry::register`].

use crate::stationary::{CorrelationProfile, StationaryKernel};
use crate::{
    AbsoluteExponentialProfile, GeneralizedExponentialProfile, MaternProfile, SphericalProfile,
    SquaredExponentialProfile,
};
use covariance_core::{BoxedKernel, KernelRegistry, ParameterStore, Result};
use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_REGISTRY: KernelRegistry = {
        let registry = KernelRegistry::new();
        register_builtin_kernels(&registry);
        registry
    };
}

/// Registry holding every kernel shipped by this crate
pub fn default_registry() -> &'static KernelRegistry {
    &DEFAULT_REGISTRY
}

/// Rebuild a kernel from `store` using the default registry
pub fn load_kernel(store: &dyn ParameterStore) -> Result<BoxedKernel> {
    default_registry().load(store)
}

/// Add every built-in kernel class to `registry`
pub fn register_builtin_kernels(registry: &KernelRegistry) {
    register::<AbsoluteExponentialProfile>(registry);
    register::<SquaredExponentialProfile>(registry);
    register::<MaternProfile>(registry);
    register::<GeneralizedExponentialProfile<f64>>(registry);
    register::<SphericalProfile<f64>>(registry);
}

fn register<P: CorrelationProfile<f64>>(registry: &KernelRegistry) {
    registry.register(P::NAME, load_stationary::<P>);
}

fn load_stationary<P: CorrelationProfile<f64>>(store: &dyn ParameterStore) -> Result<BoxedKernel> {
    Ok(Box::new(StationaryKernel::<P, f64>::load(store)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AbsoluteExponential, SphericalModel};
    use covariance_core::{CovarianceKernel, Error, MemoryStore, ParameterValue, CLASS_KEY};

    #[test]
    fn test_builtin_names() {
        assert_eq!(
            default_registry().names(),
            vec![
                "AbsoluteExponential",
                "GeneralizedExponential",
                "MaternModel",
                "SphericalModel",
                "SquaredExponential",
            ]
        );
    }

    #[test]
    fn test_load_kernel_dispatches_on_class() {
        let k = SphericalModel::with_radius(vec![1.0, 2.0], vec![0.5], 3.0).unwrap();
        let mut store = MemoryStore::new();
        k.save(&mut store);

        let loaded = load_kernel(&store).unwrap();
        assert_eq!(loaded.class_name(), "SphericalModel");
        assert_eq!(loaded.to_string(), k.to_string());
        assert_eq!(
            loaded.compute_as_scalar(&[0.5, 0.5]).unwrap(),
            k.compute_as_scalar(&[0.5, 0.5]).unwrap()
        );
    }

    #[test]
    fn test_load_kernel_propagates_parameter_errors() {
        let k = AbsoluteExponential::with_scale(vec![1.0]).unwrap();
        let mut store = MemoryStore::new();
        k.save(&mut store);
        store.save("amplitude", ParameterValue::Vector(vec![1.0, 1.0]));

        assert!(matches!(
            load_kernel(&store),
            Err(Error::InvalidOutputDimension { actual: 2, .. })
        ));

        store.save(CLASS_KEY, ParameterValue::Text("CauchyModel".to_string()));
        assert!(matches!(load_kernel(&store), Err(Error::UnknownKernel(_))));
    }
}
