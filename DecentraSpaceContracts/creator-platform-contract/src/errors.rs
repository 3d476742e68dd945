use soroban_sdk::contracterror;

/// Failure conditions for the creator platform. Every error aborts the
/// invocation with full rollback; no partial writes persist.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PlatformError {
    AlreadyInitialized = 1,
    NotInitialized = 2,

    AlreadyRegistered = 101,
    NotRegistered = 102,
    InvalidInput = 103,

    NotFound = 201,
    Unauthorized = 202,
    RoomNotLive = 203,

    CannotTipYourself = 301,
    TransferFailed = 302,
}
