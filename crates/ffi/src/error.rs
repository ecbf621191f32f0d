use impact_sim_core::ImpactError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait ImpactSimError {
    fn code(&self) -> ImpactSimErrorCode;

    fn msg(&self) -> &str;
}

/// Default implementation of `ImpactSimError` for the FFI failure cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultImpactSimError {
    code: ImpactSimErrorCode,
    msg: String,
}

impl DefaultImpactSimError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_result"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: ImpactSimErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: ImpactSimErrorCode::InvalidParameter,
            msg: message,
        }
    }

    /// Create error for an index past the end of a fixed table.
    pub fn index_out_of_range(table: &str, index: usize, len: usize) -> Self {
        Self {
            code: ImpactSimErrorCode::IndexOutOfRange,
            msg: format!("{table} index {index} out of range (count {len})"),
        }
    }
}

impl From<ImpactError> for DefaultImpactSimError {
    fn from(error: ImpactError) -> Self {
        let code = match error {
            ImpactError::NonFiniteResult { .. } | ImpactError::DegenerateResult { .. } => {
                ImpactSimErrorCode::NonFiniteResult
            }
            ImpactError::InvalidParameter { .. }
            | ImpactError::InvalidConfig { .. }
            | ImpactError::Catalog(_) => ImpactSimErrorCode::InvalidParameter,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl ImpactSimError for DefaultImpactSimError {
    fn code(&self) -> ImpactSimErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by impact simulation functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactSimErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Entry parameters outside the model's domain (diameter, velocity,
    /// angle, or composition code).
    InvalidParameter = 2,

    /// The model produced a NaN, infinite or degenerate (zero) output for
    /// these inputs.
    NonFiniteResult = 3,

    /// Index past the end of the preset table.
    IndexOutOfRange = 4,
}

thread_local! {
    /// Most recent FFI error on this thread (C string, error code).
    /// The CString is owned here so pointers handed to C stay valid.
    static LAST_ERROR: RefCell<(Option<CString>, ImpactSimErrorCode)> = const { RefCell::new((None, ImpactSimErrorCode::Ok)) };
}

pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, ImpactSimErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, ImpactSimErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns `null` if the last call on this thread succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// ImpactSimResult result;
/// if (impact_sim_calculate(&params, &result) != Ok) {
///     const char* error = impact_sim_get_last_error();
///     if (error) {
///         printf("Impact calculation failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn impact_sim_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`Ok` if the last call succeeded).
///
/// Error state is per thread.
#[no_mangle]
pub extern "C" fn impact_sim_get_last_error_code() -> ImpactSimErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
