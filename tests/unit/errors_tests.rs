/*!
 * Tests for error type display and conversion
 */

use std::path::PathBuf;

use otioflow::errors::{AppError, HostError, ImportError, ScriptError};

/// Host errors render a readable message
#[test]
fn test_host_error_display_shouldBeReadable() {
    let err = HostError::Unreachable("connection refused".to_string());
    assert!(err.to_string().contains("connection refused"));

    let err = HostError::NoProjectOpen;
    assert!(err.to_string().contains("No project"));
}

/// Script errors carry the offending script path
#[test]
fn test_script_error_display_shouldNameScript() {
    let err = ScriptError::NotFound(PathBuf::from("/scripts/otio2json.py"));
    assert!(err.to_string().contains("otio2json.py"));
}

/// Import errors wrap host errors transparently
#[test]
fn test_import_error_fromHostError_shouldConvert() {
    let err: ImportError = HostError::NoProjectOpen.into();
    assert!(matches!(err, ImportError::Host(HostError::NoProjectOpen)));
}

/// The top-level error wraps every taxonomy
#[test]
fn test_app_error_fromOtherErrors_shouldConvert() {
    let err: AppError = ScriptError::NotFound(PathBuf::from("x.py")).into();
    assert!(matches!(err, AppError::Script(_)));

    let err: AppError = ImportError::FileNotFound(PathBuf::from("x.otio")).into();
    assert!(matches!(err, AppError::Import(_)));

    let err: AppError = std::io::Error::other("disk gone").into();
    assert!(matches!(err, AppError::File(_)));
}
