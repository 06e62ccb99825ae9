use super::*;

#[test]
fn test_error_conversion() {
    let core_err = CoreError::from(Error::param("iv", "must be 16 bytes"));
    match core_err {
        CoreError::InvalidParameter { context, message } => {
            assert_eq!(context, "iv");
            assert_eq!(message, "must be 16 bytes");
        }
        other => panic!("Expected InvalidParameter error, got {:?}", other),
    }

    let core_err = CoreError::from(Error::Length {
        context: "SM4 key",
        expected: 16,
        actual: 15,
    });
    assert_eq!(
        core_err,
        CoreError::InvalidLength {
            context: "SM4 key",
            expected: 16,
            actual: 15,
        }
    );

    assert!(matches!(
        CoreError::from(Error::Authentication { algorithm: "SM2" }),
        CoreError::AuthenticationFailed { context: "SM2", .. }
    ));
    assert!(matches!(
        CoreError::from(Error::Padding { context: "SM4-CBC" }),
        CoreError::InvalidCiphertext { context: "SM4-CBC", .. }
    ));
    assert!(matches!(
        CoreError::from(Error::InvalidPoint { context: "SM2 point" }),
        CoreError::InvalidKey { .. }
    ));
}

#[test]
fn test_owned_parameter_name() {
    let name = alloc::string::String::from("dynamic");
    let core_err = CoreError::from(Error::param(name, "bad"));
    assert!(matches!(
        core_err,
        CoreError::InvalidParameter {
            context: "parameter",
            ..
        }
    ));
}

#[test]
fn test_processing_error_display() {
    let err = Error::Processing {
        operation: "SM3-KDF",
        details: "session is not seeded",
    };
    assert_eq!(
        err.to_string(),
        "Processing error in SM3-KDF: session is not seeded"
    );
    assert!(matches!(
        CoreError::from(err),
        CoreError::Other {
            context: "SM3-KDF",
            ..
        }
    ));
}

#[test]
fn test_validation_functions() {
    assert!(validate::length("buffer", 32, 32).is_ok());
    assert_eq!(
        validate::length("buffer", 16, 32).unwrap_err(),
        Error::Length {
            context: "buffer",
            expected: 32,
            actual: 16
        }
    );

    assert!(validate::block_multiple("data", 32, 16).is_ok());
    assert_eq!(
        validate::block_multiple("data", 17, 16).unwrap_err(),
        Error::Length {
            context: "data",
            expected: 32,
            actual: 17
        }
    );

    assert!(validate::authentication(true, "SM2").is_ok());
    assert_eq!(
        validate::authentication(false, "SM2").unwrap_err(),
        Error::Authentication { algorithm: "SM2" }
    );
}

