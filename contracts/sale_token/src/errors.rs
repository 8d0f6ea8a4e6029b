use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotAuthorized = 3,
    /// Transfers are paused and the acting address is not whitelisted.
    TransfersPaused = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
    NegativeAmount = 7,
    InvalidExpiration = 8,
    Overflow = 9,
}
