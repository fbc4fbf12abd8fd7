/// C FFI for Swift/Objective-C interoperability
use crate::error::OAuthError;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;
use std::slice;

/// Opaque pointer to a decoded OAuthError
pub struct AbsageError {
    _private: [u8; 0],
}

/// Decode an OAuth error response from raw bytes
///
/// # Safety
///
/// - `data` must point to `len` readable bytes, or be null
/// - Returns null on null input or when the bytes do not decode as an
///   OAuth error response
/// - The returned pointer must be freed with `absage_error_free`
#[no_mangle]
pub unsafe extern "C" fn absage_error_decode(data: *const u8, len: usize) -> *mut AbsageError {
    if data.is_null() {
        return ptr::null_mut();
    }

    let bytes = slice::from_raw_parts(data, len);

    match OAuthError::decode_from_bytes(bytes) {
        Some(error) => Box::into_raw(Box::new(error)) as *mut AbsageError,
        None => ptr::null_mut(),
    }
}

/// Get the integer error code (1 through 6)
///
/// # Safety
///
/// - `error` must be a valid pointer from `absage_error_decode`
/// - Returns 0 if `error` is null
#[no_mangle]
pub unsafe extern "C" fn absage_error_code(error: *const AbsageError) -> i32 {
    if error.is_null() {
        return 0;
    }

    let error_ref = &*(error as *const OAuthError);
    error_ref.code.int_value()
}

/// Get the wire identifier of the error code (e.g. "invalid_grant")
///
/// # Safety
///
/// - `error` must be a valid pointer from `absage_error_decode`
/// - Returns a newly allocated string that must be freed with `absage_string_free`
/// - Returns null on error
#[no_mangle]
pub unsafe extern "C" fn absage_error_wire_code(error: *const AbsageError) -> *mut c_char {
    if error.is_null() {
        return ptr::null_mut();
    }

    let error_ref = &*(error as *const OAuthError);

    match CString::new(error_ref.code.as_str()) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Get the human-readable description, if the server sent one
///
/// # Safety
///
/// - `error` must be a valid pointer from `absage_error_decode`
/// - Returns a newly allocated string that must be freed with `absage_string_free`
/// - Returns null when the description is absent
#[no_mangle]
pub unsafe extern "C" fn absage_error_description(error: *const AbsageError) -> *mut c_char {
    if error.is_null() {
        return ptr::null_mut();
    }

    let error_ref = &*(error as *const OAuthError);

    match &error_ref.description {
        Some(description) => match CString::new(description.clone()) {
            Ok(s) => s.into_raw(),
            Err(_) => ptr::null_mut(),
        },
        None => ptr::null_mut(),
    }
}

/// Get the reference URI, if the server sent one
///
/// # Safety
///
/// - `error` must be a valid pointer from `absage_error_decode`
/// - Returns a newly allocated string that must be freed with `absage_string_free`
/// - Returns null when the URI is absent
#[no_mangle]
pub unsafe extern "C" fn absage_error_uri(error: *const AbsageError) -> *mut c_char {
    if error.is_null() {
        return ptr::null_mut();
    }

    let error_ref = &*(error as *const OAuthError);

    match &error_ref.uri {
        Some(uri) => match CString::new(uri.clone()) {
            Ok(s) => s.into_raw(),
            Err(_) => ptr::null_mut(),
        },
        None => ptr::null_mut(),
    }
}

/// Get the retained raw payload, re-serialized as a JSON string
///
/// # Safety
///
/// - `error` must be a valid pointer from `absage_error_decode`
/// - Returns a newly allocated string that must be freed with `absage_string_free`
/// - Returns null when no payload was retained
#[no_mangle]
pub unsafe extern "C" fn absage_error_json(error: *const AbsageError) -> *mut c_char {
    if error.is_null() {
        return ptr::null_mut();
    }

    let error_ref = &*(error as *const OAuthError);

    let json = match &error_ref.json {
        Some(json) => json,
        None => return ptr::null_mut(),
    };

    let serialized = match serde_json::to_string(json) {
        Ok(s) => s,
        Err(_) => return ptr::null_mut(),
    };

    match CString::new(serialized) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Free a string allocated by absage
///
/// # Safety
///
/// - `s` must be a string returned by an absage function
/// - Must not be called more than once on the same pointer
#[no_mangle]
pub unsafe extern "C" fn absage_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Free a decoded error
///
/// # Safety
///
/// - `error` must be a valid pointer from `absage_error_decode`
/// - Must not be called more than once on the same pointer
#[no_mangle]
pub unsafe extern "C" fn absage_error_free(error: *mut AbsageError) {
    if !error.is_null() {
        drop(Box::from_raw(error as *mut OAuthError));
    }
}
