//! C ABI for the impact simulation core
//!
//! Stateless: every call takes plain `#[repr(C)]` structs and writes its
//! output through a caller-owned pointer. Failures return an
//! [`ImpactSimErrorCode`] and leave a message in thread-local storage
//! (see [`impact_sim_get_last_error`]).

mod error;
mod helpers;

pub use error::{impact_sim_get_last_error, impact_sim_get_last_error_code, ImpactSimErrorCode};

use error::DefaultImpactSimError;
use helpers::track_result;
use impact_sim_core::scenarios::PRESET_SCENARIOS;
use impact_sim_core::{calculate_impact, Composition, EntryParameters, ImpactResult, ImpactType};
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;
use std::sync::LazyLock;

/// Composition codes accepted in [`ImpactSimParams::composition`]
pub const IMPACT_SIM_COMPOSITION_IRON: u8 = 0;
pub const IMPACT_SIM_COMPOSITION_STONY: u8 = 1;
pub const IMPACT_SIM_COMPOSITION_CARBONACEOUS: u8 = 2;
pub const IMPACT_SIM_COMPOSITION_COMET: u8 = 3;

/// Impact type codes written to [`ImpactSimResult::impact_type`]
pub const IMPACT_SIM_AIRBURST: u8 = 0;
pub const IMPACT_SIM_SURFACE: u8 = 1;

/// Entry parameters
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactSimParams {
    /// Body diameter (m)
    pub diameter: f64,
    /// Entry speed (km/s)
    pub velocity: f64,
    /// One of the `IMPACT_SIM_COMPOSITION_*` codes
    pub composition: u8,
    /// Impact angle from horizontal (degrees); only read when `has_impact_angle`
    pub impact_angle: f64,
    /// When false the canonical 45° is used
    pub has_impact_angle: bool,
}

/// Computed effects
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImpactSimResult {
    /// `IMPACT_SIM_AIRBURST` or `IMPACT_SIM_SURFACE`
    pub impact_type: u8,
    /// Final crater diameter (m), 0 for airbursts
    pub crater_diameter: f64,
    /// Transient crater diameter (m), 0 for airbursts
    pub transient_crater_diameter: f64,
    pub mass_kg: f64,
    pub kinetic_energy_joules: f64,
    pub energy_megatons: f64,
    pub seismic_magnitude: f64,
    /// Third-degree-burn radius (km)
    pub thermal_radius_km: f64,
    pub blast_20psi_km: f64,
    pub blast_5psi_km: f64,
    pub blast_1psi_km: f64,
    /// Estimated breakup altitude (m)
    pub breakup_altitude: f64,
}

fn composition_from_code(code: u8) -> Result<Composition, DefaultImpactSimError> {
    match code {
        IMPACT_SIM_COMPOSITION_IRON => Ok(Composition::Iron),
        IMPACT_SIM_COMPOSITION_STONY => Ok(Composition::Stony),
        IMPACT_SIM_COMPOSITION_CARBONACEOUS => Ok(Composition::Carbonaceous),
        IMPACT_SIM_COMPOSITION_COMET => Ok(Composition::Comet),
        other => Err(DefaultImpactSimError::invalid_parameter(format!(
            "Unknown composition code {other} (expected 0-3)"
        ))),
    }
}

fn composition_code(composition: Composition) -> u8 {
    match composition {
        Composition::Iron => IMPACT_SIM_COMPOSITION_IRON,
        Composition::Stony => IMPACT_SIM_COMPOSITION_STONY,
        Composition::Carbonaceous => IMPACT_SIM_COMPOSITION_CARBONACEOUS,
        Composition::Comet => IMPACT_SIM_COMPOSITION_COMET,
    }
}

impl ImpactSimParams {
    fn to_entry(self) -> Result<EntryParameters, DefaultImpactSimError> {
        let composition = composition_from_code(self.composition)?;
        let params = EntryParameters::new(self.diameter, self.velocity, composition);
        Ok(if self.has_impact_angle {
            params.with_impact_angle(self.impact_angle)
        } else {
            params
        })
    }
}

impl From<&EntryParameters> for ImpactSimParams {
    fn from(params: &EntryParameters) -> Self {
        Self {
            diameter: *params.diameter,
            velocity: *params.velocity,
            composition: composition_code(params.composition),
            impact_angle: params.impact_angle.map_or(0.0, |a| *a),
            has_impact_angle: params.impact_angle.is_some(),
        }
    }
}

impl From<&ImpactResult> for ImpactSimResult {
    fn from(result: &ImpactResult) -> Self {
        let (crater_diameter, transient_crater_diameter) = result
            .crater()
            .map_or((0.0, 0.0), |c| (*c.final_diameter, *c.transient_diameter));
        Self {
            impact_type: match result.impact_type() {
                ImpactType::Airburst => IMPACT_SIM_AIRBURST,
                ImpactType::Surface => IMPACT_SIM_SURFACE,
            },
            crater_diameter,
            transient_crater_diameter,
            mass_kg: *result.mass,
            kinetic_energy_joules: *result.kinetic_energy,
            energy_megatons: *result.energy_tnt,
            seismic_magnitude: result.seismic_magnitude,
            thermal_radius_km: *result.thermal_radius,
            blast_20psi_km: *result.blast_radius.twenty_psi,
            blast_5psi_km: *result.blast_radius.five_psi,
            blast_1psi_km: *result.blast_radius.one_psi,
            breakup_altitude: *result.classification.breakup_altitude,
        }
    }
}

/// Calculate the effects of one entry with the reference model
///
/// # Returns
/// - `Ok` with `out_result` filled
/// - `NullPointer` if either pointer is null
/// - `InvalidParameter` for non-positive diameter or velocity, an angle
///   outside (0, 90], or an unknown composition code
/// - `NonFiniteResult` if the inputs overflow or underflow the model
///
/// `out_result` is left untouched on failure.
///
/// # Safety
/// `params` must point to a valid `ImpactSimParams` and `out_result` to
/// writable memory for one `ImpactSimResult`.
#[no_mangle]
pub unsafe extern "C" fn impact_sim_calculate(
    params: *const ImpactSimParams,
    out_result: *mut ImpactSimResult,
) -> ImpactSimErrorCode {
    track_result(calculate_into(params, out_result))
}

unsafe fn calculate_into(
    params: *const ImpactSimParams,
    out_result: *mut ImpactSimResult,
) -> Result<(), DefaultImpactSimError> {
    if params.is_null() {
        return Err(DefaultImpactSimError::null_pointer("params"));
    }
    if out_result.is_null() {
        return Err(DefaultImpactSimError::null_pointer("out_result"));
    }

    let entry = (*params).to_entry()?;
    let result = calculate_impact(&entry)?;
    *out_result = ImpactSimResult::from(&result);
    Ok(())
}

/// Number of built-in preset scenarios
#[no_mangle]
pub extern "C" fn impact_sim_preset_count() -> usize {
    PRESET_SCENARIOS.len()
}

/// Copy the parameters of preset `index` into `out_params`
///
/// # Returns
/// - `Ok` with `out_params` filled
/// - `NullPointer` if `out_params` is null
/// - `IndexOutOfRange` if `index >= impact_sim_preset_count()`
///
/// # Safety
/// `out_params` must point to writable memory for one `ImpactSimParams`.
#[no_mangle]
pub unsafe extern "C" fn impact_sim_preset_params(
    index: usize,
    out_params: *mut ImpactSimParams,
) -> ImpactSimErrorCode {
    track_result(preset_into(index, out_params))
}

unsafe fn preset_into(
    index: usize,
    out_params: *mut ImpactSimParams,
) -> Result<(), DefaultImpactSimError> {
    if out_params.is_null() {
        return Err(DefaultImpactSimError::null_pointer("out_params"));
    }
    let preset = PRESET_SCENARIOS.get(index).ok_or_else(|| {
        DefaultImpactSimError::index_out_of_range("preset", index, PRESET_SCENARIOS.len())
    })?;
    *out_params = ImpactSimParams::from(&preset.parameters);
    Ok(())
}

static PRESET_NAMES: LazyLock<Vec<CString>> = LazyLock::new(|| {
    PRESET_SCENARIOS
        .iter()
        .filter_map(|p| CString::new(p.name).ok())
        .collect()
});

/// Display name of preset `index`, or null if out of range
///
/// The string is static; **DO NOT FREE THIS POINTER**.
#[no_mangle]
pub extern "C" fn impact_sim_preset_name(index: usize) -> *const c_char {
    PRESET_NAMES.get(index).map_or(ptr::null(), |name| name.as_ptr())
}
