//! The value-typed data model shared across the engine: geometry, fluid
//! inlet, ambient conditions, insulation and network configuration.
//! Every entity here is a plain value; construction validates each
//! type's contracts eagerly so an invalid instance can never exist.

use crate::errors::{EngineError, EngineResult};
use crate::hydraulics::{require_non_negative, require_positive};

/// Pipe geometry: inner/outer diameter, wall roughness, length, and the
/// wall material id. `outer_diameter_m` must exceed `inner_diameter_m`;
/// `roughness_m` may be zero (perfectly smooth) but not negative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometrySpec {
    /// Inner diameter, m.
    pub inner_diameter_m: f64,
    /// Outer diameter, m.
    pub outer_diameter_m: f64,
    /// Absolute wall roughness, m.
    pub roughness_m: f64,
    /// Pipe (or segment) length, m.
    pub length_m: f64,
    /// Material id, a key into [`crate::materials::MaterialRegistry`].
    pub material_id: String,
}

impl GeometrySpec {
    /// Constructs a geometry, validating D_o > D_i, ε ≥ 0, and L > 0.
    pub fn new(
        inner_diameter_m: f64,
        outer_diameter_m: f64,
        roughness_m: f64,
        length_m: f64,
        material_id: impl Into<String>,
    ) -> EngineResult<Self> {
        require_positive("inner_diameter_m", inner_diameter_m)?;
        require_positive("outer_diameter_m", outer_diameter_m)?;
        require_non_negative("roughness_m", roughness_m)?;
        require_positive("length_m", length_m)?;
        if outer_diameter_m <= inner_diameter_m {
            return Err(EngineError::InvalidInput {
                field: "outer_diameter_m",
                value: format!("{outer_diameter_m}"),
                reason: "outer diameter must exceed inner diameter",
            });
        }
        Ok(GeometrySpec {
            inner_diameter_m,
            outer_diameter_m,
            roughness_m,
            length_m,
            material_id: material_id.into(),
        })
    }

    /// Returns a copy of this geometry with `length_m` replaced, used by
    /// the network integrator to carve out one segment's worth of pipe.
    pub fn with_length(&self, length_m: f64) -> GeometrySpec {
        GeometrySpec {
            length_m,
            ..self.clone()
        }
    }

    /// Relative roughness, ε/D_i, dimensionless.
    pub fn relative_roughness(&self) -> f64 {
        self.roughness_m / self.inner_diameter_m
    }
}

/// Fluid conditions at the pipe inlet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FluidInlet {
    /// Temperature, °C. Must be finite (may be below 0 — a frozen or
    /// supercooled inlet is a valid, if unusual, starting condition).
    pub temperature_c: f64,
    /// Absolute pressure, bar. Must be strictly positive.
    pub pressure_bar: f64,
    /// Mass flow rate, kg/s. Must be strictly positive.
    pub mass_flow_kg_s: f64,
}

impl FluidInlet {
    /// Constructs a fluid inlet state, validating P > 0 and ṁ > 0 and
    /// that `temperature_c` is finite.
    pub fn new(temperature_c: f64, pressure_bar: f64, mass_flow_kg_s: f64) -> EngineResult<Self> {
        if !temperature_c.is_finite() {
            return Err(EngineError::InvalidInput {
                field: "temperature_c",
                value: format!("{temperature_c}"),
                reason: "must be finite",
            });
        }
        require_positive("pressure_bar", pressure_bar)?;
        require_positive("mass_flow_kg_s", mass_flow_kg_s)?;
        Ok(FluidInlet {
            temperature_c,
            pressure_bar,
            mass_flow_kg_s,
        })
    }
}

/// Ambient air conditions around the pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ambient {
    /// Air temperature, °C, in [−40, 50].
    pub temperature_c: f64,
    /// Wind speed, m/s, ≥ 0.
    pub wind_speed_m_s: f64,
}

impl Ambient {
    /// Constructs ambient conditions, validating T_amb ∈ [−40, 50] and
    /// V_wind ≥ 0.
    pub fn new(temperature_c: f64, wind_speed_m_s: f64) -> EngineResult<Self> {
        if !(-40.0..=50.0).contains(&temperature_c) {
            return Err(EngineError::InvalidInput {
                field: "ambient.temperature_c",
                value: format!("{temperature_c}"),
                reason: "must lie in [-40, 50]",
            });
        }
        require_non_negative("wind_speed_m_s", wind_speed_m_s)?;
        Ok(Ambient {
            temperature_c,
            wind_speed_m_s,
        })
    }
}

/// An optional insulation layer around the pipe's outer diameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsulationLayer {
    /// Material id, a key into [`crate::materials::MaterialRegistry`].
    pub material_id: String,
    /// Thickness, m. Must be strictly positive.
    pub thickness_m: f64,
}

impl InsulationLayer {
    /// Constructs an insulation layer, validating t > 0.
    pub fn new(material_id: impl Into<String>, thickness_m: f64) -> EngineResult<Self> {
        require_positive("insulation.thickness_m", thickness_m)?;
        Ok(InsulationLayer {
            material_id: material_id.into(),
            thickness_m,
        })
    }
}

/// Full network configuration: total pipe geometry, segmentation count,
/// inlet, ambient and optional insulation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkConfig {
    /// Geometry, interpreted as the total pipe (its `length_m` is the
    /// total length, not a single segment's length).
    pub geometry: GeometrySpec,
    /// Number of equal-length segments, N ≥ 1.
    pub segments: usize,
    /// Fluid inlet state.
    pub inlet: FluidInlet,
    /// Ambient conditions.
    pub ambient: Ambient,
    /// Optional insulation layer.
    pub insulation: Option<InsulationLayer>,
    /// T_mean fixed-point iteration count per segment, 1–10 (default 2).
    pub iterations: usize,
}

/// Two T_mean iterations are contractually sufficient for the
/// convergence tolerance for the correlations this engine uses; this is
/// the documented default. Changing it is a deliberate accuracy/speed
/// trade-off, not a magic number.
pub const DEFAULT_TMEAN_ITERATIONS: usize = 2;

impl NetworkConfig {
    /// Constructs a network configuration, validating `segments ≥ 1` and
    /// `iterations ∈ [1, 10]`.
    pub fn new(
        geometry: GeometrySpec,
        segments: usize,
        inlet: FluidInlet,
        ambient: Ambient,
        insulation: Option<InsulationLayer>,
    ) -> EngineResult<Self> {
        Self::with_iterations(geometry, segments, inlet, ambient, insulation, DEFAULT_TMEAN_ITERATIONS)
    }

    /// As [`NetworkConfig::new`], with an explicit T_mean iteration count.
    pub fn with_iterations(
        geometry: GeometrySpec,
        segments: usize,
        inlet: FluidInlet,
        ambient: Ambient,
        insulation: Option<InsulationLayer>,
        iterations: usize,
    ) -> EngineResult<Self> {
        if segments < 1 {
            return Err(EngineError::InvalidInput {
                field: "segments",
                value: format!("{segments}"),
                reason: "must be at least 1",
            });
        }
        if !(1..=10).contains(&iterations) {
            return Err(EngineError::InvalidInput {
                field: "iterations",
                value: format!("{iterations}"),
                reason: "must lie in [1, 10]",
            });
        }
        Ok(NetworkConfig {
            geometry,
            segments,
            inlet,
            ambient,
            insulation,
            iterations,
        })
    }

    /// Total pipe length, m.
    pub fn total_length_m(&self) -> f64 {
        self.geometry.length_m
    }

    /// Length of one segment, m: L_total / N.
    pub fn segment_length_m(&self) -> f64 {
        self.total_length_m() / self.segments as f64
    }
}
