//! Material registry: pipe-wall and insulation properties, keyed by a
//! lowercase underscore-separated id. Immutable after process
//! startup; lookups return a defensive copy, never a reference into the
//! registry's backing storage.

use crate::errors::{EngineError, EngineResult};

/// Broad category a material id belongs to, used by callers that want to
/// restrict a dropdown (e.g. "only show insulation materials").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaterialCategory {
    /// Structural pipe-wall metals.
    Metal,
    /// Thermal insulation layers.
    Insulation,
    /// Plastic pipe-wall materials.
    Plastic,
}

/// Thermophysical properties of one registered material.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialProperties {
    /// Human-readable name.
    pub name: &'static str,
    /// Material category.
    pub category: MaterialCategory,
    /// Thermal conductivity, W/(m·K).
    pub thermal_conductivity_w_m_k: f64,
    /// Density, kg/m³.
    pub density_kg_m3: f64,
    /// Specific heat capacity, J/(kg·K).
    pub specific_heat_j_kg_k: f64,
    /// Surface emissivity, dimensionless, in [0, 1].
    pub emissivity: f64,
}

struct MaterialEntry {
    id: &'static str,
    properties: MaterialProperties,
}

/// The minimum recognized material set.
const REGISTRY: &[MaterialEntry] = &[
    MaterialEntry {
        id: "steel",
        properties: MaterialProperties {
            name: "Carbon steel",
            category: MaterialCategory::Metal,
            thermal_conductivity_w_m_k: 45.0,
            density_kg_m3: 7850.0,
            specific_heat_j_kg_k: 486.0,
            emissivity: 0.80,
        },
    },
    MaterialEntry {
        id: "steel_polished",
        properties: MaterialProperties {
            name: "Carbon steel (polished)",
            category: MaterialCategory::Metal,
            thermal_conductivity_w_m_k: 45.0,
            density_kg_m3: 7850.0,
            specific_heat_j_kg_k: 486.0,
            emissivity: 0.10,
        },
    },
    MaterialEntry {
        id: "stainless_steel",
        properties: MaterialProperties {
            name: "Stainless steel",
            category: MaterialCategory::Metal,
            thermal_conductivity_w_m_k: 16.2,
            density_kg_m3: 8000.0,
            specific_heat_j_kg_k: 500.0,
            emissivity: 0.85,
        },
    },
    MaterialEntry {
        id: "stainless_steel_polished",
        properties: MaterialProperties {
            name: "Stainless steel (polished)",
            category: MaterialCategory::Metal,
            thermal_conductivity_w_m_k: 16.2,
            density_kg_m3: 8000.0,
            specific_heat_j_kg_k: 500.0,
            emissivity: 0.075,
        },
    },
    MaterialEntry {
        id: "copper",
        properties: MaterialProperties {
            name: "Copper",
            category: MaterialCategory::Metal,
            thermal_conductivity_w_m_k: 401.0,
            density_kg_m3: 8960.0,
            specific_heat_j_kg_k: 385.0,
            emissivity: 0.78,
        },
    },
    MaterialEntry {
        id: "copper_polished",
        properties: MaterialProperties {
            name: "Copper (polished)",
            category: MaterialCategory::Metal,
            thermal_conductivity_w_m_k: 401.0,
            density_kg_m3: 8960.0,
            specific_heat_j_kg_k: 385.0,
            emissivity: 0.03,
        },
    },
    MaterialEntry {
        id: "cast_iron",
        properties: MaterialProperties {
            name: "Cast iron",
            category: MaterialCategory::Metal,
            thermal_conductivity_w_m_k: 52.0,
            density_kg_m3: 7200.0,
            specific_heat_j_kg_k: 460.0,
            emissivity: 0.81,
        },
    },
    MaterialEntry {
        id: "aluminum",
        properties: MaterialProperties {
            name: "Aluminum",
            category: MaterialCategory::Metal,
            thermal_conductivity_w_m_k: 237.0,
            density_kg_m3: 2700.0,
            specific_heat_j_kg_k: 897.0,
            emissivity: 0.09,
        },
    },
    MaterialEntry {
        id: "fiberglass",
        properties: MaterialProperties {
            name: "Fiberglass insulation",
            category: MaterialCategory::Insulation,
            thermal_conductivity_w_m_k: 0.040,
            density_kg_m3: 25.0,
            specific_heat_j_kg_k: 840.0,
            emissivity: 0.90,
        },
    },
    MaterialEntry {
        id: "mineral_wool",
        properties: MaterialProperties {
            name: "Mineral wool",
            category: MaterialCategory::Insulation,
            thermal_conductivity_w_m_k: 0.038,
            density_kg_m3: 100.0,
            specific_heat_j_kg_k: 840.0,
            emissivity: 0.90,
        },
    },
    MaterialEntry {
        id: "polyurethane_foam",
        properties: MaterialProperties {
            name: "Polyurethane foam",
            category: MaterialCategory::Insulation,
            thermal_conductivity_w_m_k: 0.025,
            density_kg_m3: 35.0,
            specific_heat_j_kg_k: 1590.0,
            emissivity: 0.90,
        },
    },
    MaterialEntry {
        id: "polystyrene_expanded",
        properties: MaterialProperties {
            name: "Expanded polystyrene (EPS)",
            category: MaterialCategory::Insulation,
            thermal_conductivity_w_m_k: 0.036,
            density_kg_m3: 20.0,
            specific_heat_j_kg_k: 1300.0,
            emissivity: 0.60,
        },
    },
    MaterialEntry {
        id: "polystyrene_extruded",
        properties: MaterialProperties {
            name: "Extruded polystyrene (XPS)",
            category: MaterialCategory::Insulation,
            thermal_conductivity_w_m_k: 0.029,
            density_kg_m3: 35.0,
            specific_heat_j_kg_k: 1300.0,
            emissivity: 0.60,
        },
    },
    MaterialEntry {
        id: "elastomeric_foam",
        properties: MaterialProperties {
            name: "Elastomeric foam",
            category: MaterialCategory::Insulation,
            thermal_conductivity_w_m_k: 0.034,
            density_kg_m3: 70.0,
            specific_heat_j_kg_k: 1400.0,
            emissivity: 0.90,
        },
    },
    MaterialEntry {
        id: "pvc",
        properties: MaterialProperties {
            name: "PVC",
            category: MaterialCategory::Plastic,
            thermal_conductivity_w_m_k: 0.19,
            density_kg_m3: 1400.0,
            specific_heat_j_kg_k: 900.0,
            emissivity: 0.92,
        },
    },
    MaterialEntry {
        id: "hdpe",
        properties: MaterialProperties {
            name: "HDPE",
            category: MaterialCategory::Plastic,
            thermal_conductivity_w_m_k: 0.48,
            density_kg_m3: 950.0,
            specific_heat_j_kg_k: 1900.0,
            emissivity: 0.92,
        },
    },
    MaterialEntry {
        id: "pex",
        properties: MaterialProperties {
            name: "PEX",
            category: MaterialCategory::Plastic,
            thermal_conductivity_w_m_k: 0.41,
            density_kg_m3: 940.0,
            specific_heat_j_kg_k: 2300.0,
            emissivity: 0.92,
        },
    },
];

/// Immutable, process-wide material registry.
///
/// `MaterialRegistry` itself carries no state beyond a marker; it exists
/// as a handle so the lookup API reads like `get_material(id) ->
/// MaterialProperties` rather than a bag of free functions.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaterialRegistry;

impl MaterialRegistry {
    /// Creates a handle onto the process-wide material registry. There is
    /// no per-instance state, so this never fails and is cheap to call
    /// repeatedly.
    pub fn new() -> Self {
        MaterialRegistry
    }

    /// Looks up a material by id. Returns a defensive copy; never a
    /// reference into static storage.
    pub fn get(&self, id: &str) -> EngineResult<MaterialProperties> {
        REGISTRY
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.properties)
            .ok_or_else(|| EngineError::UnknownMaterial { id: id.to_string() })
    }

    /// All recognized material ids, in registration order.
    pub fn material_ids(&self) -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|entry| entry.id)
    }
}
