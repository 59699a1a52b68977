//! Dimension → splash variant lookup.
//!
//! Populated once at startup. Lookups never fail: unknown dimensions get the
//! fallback variant.

use std::sync::Arc;

use nimbus_world::DimensionId;
use rustc_hash::FxHashMap;

use crate::variant::{NetherSplash, NullSplash, SplashVariant, StormSplash};

/// Maps [`DimensionId`] to the [`SplashVariant`] that renders its weather.
pub struct SplashDispatch {
    variants: FxHashMap<DimensionId, Arc<dyn SplashVariant>>,
    fallback: Arc<dyn SplashVariant>,
}

impl SplashDispatch {
    /// Creates a table with no entries that resolves everything to `fallback`.
    pub fn new(fallback: Arc<dyn SplashVariant>) -> Self {
        Self {
            variants: FxHashMap::default(),
            fallback,
        }
    }

    /// Standard table: open-sky storms in the overworld (also the fallback),
    /// enclosed dust storms in the nether, nothing in the end.
    pub fn with_defaults() -> Self {
        let storm: Arc<dyn SplashVariant> = Arc::new(StormSplash);
        let mut dispatch = Self::new(Arc::clone(&storm));
        dispatch.register(DimensionId::OVERWORLD, storm);
        dispatch.register(DimensionId::NETHER, Arc::new(NetherSplash));
        dispatch.register(DimensionId::END, Arc::new(NullSplash));
        dispatch
    }

    /// Registers `variant` for `id`, returning the variant it replaced.
    pub fn register(
        &mut self,
        id: DimensionId,
        variant: Arc<dyn SplashVariant>,
    ) -> Option<Arc<dyn SplashVariant>> {
        tracing::debug!(dimension = id.0, variant = variant.name(), "registered splash variant");
        self.variants.insert(id, variant)
    }

    /// The variant for `id`, or the fallback if none is registered.
    pub fn resolve(&self, id: DimensionId) -> &Arc<dyn SplashVariant> {
        self.variants.get(&id).unwrap_or(&self.fallback)
    }

    /// The variant used for unregistered dimensions.
    pub fn fallback(&self) -> &Arc<dyn SplashVariant> {
        &self.fallback
    }

    /// Number of explicitly registered dimensions.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl Default for SplashDispatch {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_resolves_to_default_instance() {
        let dispatch = SplashDispatch::with_defaults();
        let unknown = dispatch.resolve(DimensionId(42));
        let overworld = dispatch.resolve(DimensionId::OVERWORLD);
        assert!(Arc::ptr_eq(unknown, overworld));
        assert!(Arc::ptr_eq(unknown, dispatch.fallback()));
    }

    #[test]
    fn test_default_entries() {
        let dispatch = SplashDispatch::with_defaults();
        assert_eq!(dispatch.len(), 3);
        assert_eq!(dispatch.resolve(DimensionId::OVERWORLD).name(), "storm");
        assert_eq!(dispatch.resolve(DimensionId::NETHER).name(), "nether");
        assert_eq!(dispatch.resolve(DimensionId::END).name(), "none");
    }

    #[test]
    fn test_register_replaces_and_returns_previous() {
        let mut dispatch = SplashDispatch::with_defaults();
        let previous = dispatch.register(DimensionId::END, Arc::new(StormSplash));
        assert_eq!(previous.map(|v| v.name()), Some("none"));
        assert_eq!(dispatch.resolve(DimensionId::END).name(), "storm");
        assert_eq!(dispatch.len(), 3);
    }

    #[test]
    fn test_empty_table_uses_fallback() {
        let dispatch = SplashDispatch::new(Arc::new(NullSplash));
        assert!(dispatch.is_empty());
        assert_eq!(dispatch.resolve(DimensionId::OVERWORLD).name(), "none");
    }
}
