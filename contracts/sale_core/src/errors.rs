use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidConfig = 3,
    NotAuthorized = 4,
    NotWhitelisted = 5,
    SaleNotYetOpen = 6,
    SaleClosed = 7,
    CapExceeded = 8,
    BelowMinimumContribution = 9,
    InsufficientLedgerAllowance = 10,
    AlreadyFinalized = 11,
    NotYetFinalized = 12,
    AlreadyClaimed = 13,
    NothingToClaim = 14,
    GateNotOpen = 15,
    AlreadyUnlocked = 16,
    Overflow = 17,
    SaleStillOpen = 18,
}
