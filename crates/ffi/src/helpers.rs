use crate::error::{with_last_error_mut, ImpactSimError, ImpactSimErrorCode};
use std::ffi::CString;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl ImpactSimError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Record an error in thread-local storage and return its code.
#[inline]
pub(crate) fn track_error(error: &impl ImpactSimError) -> ImpactSimErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code after a successful call.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = ImpactSimErrorCode::Ok;
    });
}

/// Record the outcome of a fallible call: clear the error slot on success,
/// fill it on failure.
pub(crate) fn track_result<E: ImpactSimError>(result: Result<(), E>) -> ImpactSimErrorCode {
    match result {
        Ok(()) => {
            clear_last_error();
            ImpactSimErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}
