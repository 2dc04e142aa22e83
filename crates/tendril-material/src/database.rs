//! Material database with the built-in chain presets.

use std::collections::HashMap;

use crate::properties::ChainMaterial;

/// A named collection of chain material presets.
///
/// Materials are looked up by name (e.g., "pinned_segment", "snake").
/// Custom materials can be registered at runtime.
#[derive(Debug, Clone)]
pub struct MaterialDatabase {
    materials: HashMap<String, ChainMaterial>,
}

impl MaterialDatabase {
    /// Creates a new database with the 3 built-in presets.
    pub fn with_defaults() -> Self {
        let mut db = Self::empty();

        db.register(pinned_segment());
        db.register(sine_segment());
        db.register(snake());

        db
    }

    /// Creates an empty database.
    pub fn empty() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Registers a material. Overwrites if the name already exists.
    pub fn register(&mut self, material: ChainMaterial) {
        self.materials.insert(material.name.clone(), material);
    }

    /// Looks up a material by name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<&ChainMaterial> {
        self.materials.get(name)
    }

    /// Returns all registered material names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.materials.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialDatabase {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Built-in Presets ─────────────────────────────────────────────────

/// Single free node on a 200-unit leash. Mild stiffening under strain.
pub fn pinned_segment() -> ChainMaterial {
    ChainMaterial {
        name: "pinned_segment".into(),
        base_stiffness: 8.0,
        poisson_ratio: 0.1,
        damping: 0.94,
        mass: 1.0,
    }
}

/// Wave-rendered segment. Plain Hookean spring; the ripple carries the look.
pub fn sine_segment() -> ChainMaterial {
    ChainMaterial {
        name: "sine_segment".into(),
        base_stiffness: 8.0,
        poisson_ratio: 0.0,
        damping: 0.94,
        mass: 1.0,
    }
}

/// Heavy, strongly coupled 20-node chain.
pub fn snake() -> ChainMaterial {
    ChainMaterial {
        name: "snake".into(),
        base_stiffness: 20.0,
        poisson_ratio: 0.4,
        damping: 0.8,
        mass: 5.0,
    }
}
