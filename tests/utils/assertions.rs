//! Custom assertions for sale contract testing

/// Assert a `try_*` client call failed with the given contract error
#[macro_export]
macro_rules! assert_sale_error {
    ($result:expr, $expected_error:expr) => {
        match $result {
            Err(Ok(code)) => assert_eq!(code, $expected_error, "Contract error code mismatch"),
            Err(Err(invoke)) => panic!("Expected contract error, got {:?}", invoke),
            Ok(_) => panic!("Expected contract error but succeeded"),
        }
    };
}

/// Assert a `try_*` client call failed, whatever the reason
#[macro_export]
macro_rules! assert_call_fails {
    ($result:expr) => {
        assert!($result.is_err(), "Expected call to fail but it succeeded")
    };
}

/// Assert token balance of an address
#[macro_export]
macro_rules! assert_balance {
    ($token:expr, $address:expr, $expected:expr) => {
        assert_eq!(
            $token.balance($address),
            $expected,
            "Unexpected token balance"
        )
    };
}
