//! Biome registry: maps [`BiomeId`] to [`BiomeDef`] with name-based lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Unique identifier for a biome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BiomeId(pub u16);

/// Weather-relevant properties of a biome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiomeDef {
    /// Human-readable biome name (e.g., "plains").
    pub name: String,
    /// Base temperature at sea level. Snow falls below 0.15.
    pub temperature: f32,
    /// Whether rain or snow falls here at all.
    pub precipitation: bool,
    /// Whether storms here carry fine dust instead of water.
    pub dust: bool,
}

impl BiomeDef {
    /// Creates a biome definition.
    pub fn new(name: impl Into<String>, temperature: f32, precipitation: bool, dust: bool) -> Self {
        Self {
            name: name.into(),
            temperature,
            precipitation,
            dust,
        }
    }
}

/// Errors that can occur when registering biomes.
#[derive(Debug, thiserror::Error)]
pub enum BiomeRegistryError {
    /// A biome with this name is already registered.
    #[error("duplicate biome name: {0}")]
    DuplicateName(String),
    /// Every [`BiomeId`] is already taken.
    #[error("biome registry is full ({0} biomes)")]
    Full(usize),
}

/// Stores all registered biome definitions with O(1) lookup by ID.
pub struct BiomeRegistry {
    biomes: Vec<BiomeDef>,
    name_to_id: FxHashMap<String, BiomeId>,
}

impl BiomeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            biomes: Vec::new(),
            name_to_id: FxHashMap::default(),
        }
    }

    /// Registers a new biome definition, returning its assigned [`BiomeId`].
    ///
    /// # Errors
    ///
    /// Returns [`BiomeRegistryError::DuplicateName`] if a biome with the same name exists,
    /// or [`BiomeRegistryError::Full`] once all ids are assigned.
    pub fn register(&mut self, def: BiomeDef) -> Result<BiomeId, BiomeRegistryError> {
        if self.name_to_id.contains_key(&def.name) {
            return Err(BiomeRegistryError::DuplicateName(def.name));
        }
        let index = u16::try_from(self.biomes.len())
            .map_err(|_| BiomeRegistryError::Full(self.biomes.len()))?;
        let id = BiomeId(index);
        self.name_to_id.insert(def.name.clone(), id);
        self.biomes.push(def);
        Ok(id)
    }

    /// Returns the definition for the given biome ID, if registered.
    pub fn get(&self, id: BiomeId) -> Option<&BiomeDef> {
        self.biomes.get(id.0 as usize)
    }

    /// Looks up a biome ID by name.
    pub fn lookup_by_name(&self, name: &str) -> Option<BiomeId> {
        self.name_to_id.get(name).copied()
    }

    /// Returns the number of registered biomes.
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    /// Returns `true` if no biomes are registered.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}

impl Default for BiomeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
