//! FFI bindings for Wellscore
//!
//! This module provides C-compatible functions for calling the engine from a
//! host presentation layer. All functions use C strings (null-terminated) and
//! return allocated memory that must be freed by the caller using
//! `wellscore_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::advice::select_recommendations;
use crate::metrics::compute_metrics;
use crate::pipeline::{evaluate_check_in, CheckInProcessor};
use crate::types::{DailyInput, Profile};

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Parse and validate both boundary records, recording any failure
unsafe fn parse_records(
    profile_json: *const c_char,
    input_json: *const c_char,
) -> Option<(Profile, DailyInput)> {
    let profile_str = match cstr_to_string(profile_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid profile string pointer");
            return None;
        }
    };

    let input_str = match cstr_to_string(input_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid input string pointer");
            return None;
        }
    };

    let profile: Profile = match serde_json::from_str(&profile_str) {
        Ok(p) => p,
        Err(e) => {
            set_last_error(&format!("Failed to parse profile: {e}"));
            return None;
        }
    };

    let input: DailyInput = match serde_json::from_str(&input_str) {
        Ok(i) => i,
        Err(e) => {
            set_last_error(&format!("Failed to parse daily input: {e}"));
            return None;
        }
    };

    if let Err(e) = profile.validate() {
        set_last_error(&e.to_string());
        return None;
    }
    if let Err(e) = input.validate() {
        set_last_error(&e.to_string());
        return None;
    }

    Some((profile, input))
}

// ============================================================================
// Stateless API
// ============================================================================

/// Evaluate one check-in and return the report JSON.
///
/// # Safety
/// - `profile_json` and `input_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `wellscore_free_string`.
/// - Returns NULL on error; call `wellscore_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn wellscore_evaluate_check_in(
    profile_json: *const c_char,
    input_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let profile_str = match cstr_to_string(profile_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid profile string pointer");
            return ptr::null_mut();
        }
    };

    let input_str = match cstr_to_string(input_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid input string pointer");
            return ptr::null_mut();
        }
    };

    match evaluate_check_in(&profile_str, &input_str) {
        Ok(report) => string_to_cstr(&report),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Compute health metrics only and return them as JSON.
///
/// # Safety
/// - `profile_json` and `input_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `wellscore_free_string`.
/// - Returns NULL on error; call `wellscore_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn wellscore_compute_metrics(
    profile_json: *const c_char,
    input_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let (profile, input) = match parse_records(profile_json, input_json) {
        Some(records) => records,
        None => return ptr::null_mut(),
    };

    let metrics = compute_metrics(&profile, &input);
    match serde_json::to_string(&metrics) {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&format!("Failed to encode metrics: {e}"));
            ptr::null_mut()
        }
    }
}

/// Select recommendations only and return them as a JSON array.
///
/// # Safety
/// - `profile_json` and `input_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `wellscore_free_string`.
/// - Returns NULL on error; call `wellscore_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn wellscore_recommendations(
    profile_json: *const c_char,
    input_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let (profile, input) = match parse_records(profile_json, input_json) {
        Some(records) => records,
        None => return ptr::null_mut(),
    };

    let metrics = compute_metrics(&profile, &input);
    let recommendations = select_recommendations(&input, &metrics);
    match serde_json::to_string(&recommendations) {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&format!("Failed to encode recommendations: {e}"));
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Stateful Processor API
// ============================================================================

/// Opaque handle to a CheckInProcessor
pub struct CheckInProcessorHandle {
    processor: CheckInProcessor,
}

/// Create a new CheckInProcessor.
///
/// # Safety
/// - Returns a pointer to a newly allocated processor.
/// - Must be freed with `wellscore_processor_free`.
#[no_mangle]
pub unsafe extern "C" fn wellscore_processor_new() -> *mut CheckInProcessorHandle {
    clear_last_error();
    let handle = Box::new(CheckInProcessorHandle {
        processor: CheckInProcessor::new(),
    });
    Box::into_raw(handle)
}

/// Free a CheckInProcessor.
///
/// # Safety
/// - `processor` must be a valid pointer returned by `wellscore_processor_new`.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn wellscore_processor_free(processor: *mut CheckInProcessorHandle) {
    if !processor.is_null() {
        drop(Box::from_raw(processor));
    }
}

/// Evaluate one check-in with a stateful processor, so every report carries
/// the same producer instance ID.
///
/// # Safety
/// - `processor` must be a valid pointer returned by `wellscore_processor_new`.
/// - `profile_json` and `input_json` must be valid null-terminated C strings.
/// - Returns a newly allocated string that must be freed with `wellscore_free_string`.
/// - Returns NULL on error; call `wellscore_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn wellscore_processor_evaluate(
    processor: *mut CheckInProcessorHandle,
    profile_json: *const c_char,
    input_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    if processor.is_null() {
        set_last_error("Null processor pointer");
        return ptr::null_mut();
    }

    let handle = &*processor;

    let profile_str = match cstr_to_string(profile_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid profile string pointer");
            return ptr::null_mut();
        }
    };

    let input_str = match cstr_to_string(input_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid input string pointer");
            return ptr::null_mut();
        }
    };

    match handle.processor.evaluate_json(&profile_str, &input_str) {
        Ok(report) => string_to_cstr(&report),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by Wellscore functions.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by a Wellscore function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn wellscore_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next Wellscore function call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn wellscore_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

// ============================================================================
// Version Information
// ============================================================================

/// Get the Wellscore library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn wellscore_version() -> *const c_char {
    // Use a static CString to avoid allocation
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
