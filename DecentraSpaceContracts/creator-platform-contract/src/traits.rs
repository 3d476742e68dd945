use crate::errors::PlatformError;
use crate::types::{Content, Creator, LiveRoom, PlatformStats};
use soroban_sdk::{Address, BytesN, Env, String, Vec};

/// Interface for the creator platform ledger.
///
/// Every mutating entry point takes the acting address explicitly and
/// authenticates it with `require_auth`; any returned error aborts the
/// invocation with full rollback.
pub trait CreatorPlatformTrait {
    /// One-shot setup: stores the admin and the token contract whose
    /// transfers carry tips (the native XLM SAC in deployment).
    fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), PlatformError>;

    /// Upgrades the contract WASM. Admin only.
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), PlatformError>;

    /// Returns the configured payment token.
    fn get_payment_token(env: Env) -> Result<Address, PlatformError>;

    /// Registers the caller as a creator. One profile per address.
    fn register_creator(
        env: Env,
        caller: Address,
        name: String,
        description: String,
    ) -> Result<(), PlatformError>;

    /// Overwrites the caller's display name and bio; counters are untouched.
    fn update_creator(
        env: Env,
        caller: Address,
        name: String,
        description: String,
    ) -> Result<(), PlatformError>;

    /// Total read: unregistered addresses yield a zero-valued profile rather
    /// than an error. Use `is_creator_registered` to check existence.
    fn get_creator(env: Env, address: Address) -> Creator;

    fn is_creator_registered(env: Env, address: Address) -> bool;

    /// All registered creators, most recently registered first.
    fn get_featured_creators(env: Env) -> Vec<Address>;

    /// Publishes an immutable content record and returns its sequential id
    /// (`content_<n>`). Registered creators only.
    fn upload_content(
        env: Env,
        caller: Address,
        title: String,
        cid: String,
    ) -> Result<String, PlatformError>;

    /// Bumps the view counter. Any caller, self-views included.
    fn view_content(env: Env, viewer: Address, id: String) -> Result<(), PlatformError>;

    /// Fails with `NotFound` for unknown ids, unlike `get_creator`.
    fn get_content(env: Env, id: String) -> Result<Content, PlatformError>;

    fn get_creator_contents(env: Env, address: Address) -> Vec<String>;

    /// All content ids, most recently published first.
    fn get_latest_content(env: Env) -> Vec<String>;

    /// Opens a live room (`room_<n>`, live, zero participants) and returns
    /// its id. Registered creators only.
    fn create_live_room(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        huddle_link: String,
    ) -> Result<String, PlatformError>;

    /// Flips the live flag. Room owner only.
    fn update_live_room_status(
        env: Env,
        caller: Address,
        id: String,
        is_live: bool,
    ) -> Result<(), PlatformError>;

    /// Increments the participant count of a live room. Repeat joins by the
    /// same address all count.
    fn join_live_room(env: Env, participant: Address, id: String) -> Result<(), PlatformError>;

    /// Decrements the participant count, never below zero.
    fn leave_live_room(env: Env, participant: Address, id: String) -> Result<(), PlatformError>;

    fn get_live_room(env: Env, id: String) -> Result<LiveRoom, PlatformError>;

    fn get_creator_live_rooms(env: Env, address: Address) -> Vec<String>;

    /// Ids of rooms currently live, most recently created first.
    fn get_active_live_rooms(env: Env) -> Vec<String>;

    /// Sends `amount` of the payment token to the creator and credits their
    /// earnings, atomically.
    fn tip_creator(
        env: Env,
        tipper: Address,
        creator: Address,
        amount: i128,
    ) -> Result<(), PlatformError>;

    /// Tips the creator who owns the content; also tracked on the content
    /// record itself.
    fn tip_content(env: Env, tipper: Address, id: String, amount: i128)
        -> Result<(), PlatformError>;

    /// Tips the creator hosting the room.
    fn tip_live_room(
        env: Env,
        tipper: Address,
        id: String,
        amount: i128,
    ) -> Result<(), PlatformError>;

    /// Aggregate counters; always equal to the sums of the per-entity state.
    fn get_platform_stats(env: Env) -> PlatformStats;
}
