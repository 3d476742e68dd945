use crate::content;
use crate::creators;
use crate::errors::PlatformError;
use crate::rooms;
use crate::tipping;
use crate::types::{DataKey, PlatformStats};
use soroban_sdk::{Address, BytesN, Env, Symbol};

/// Initializes the contract with an admin and the token that carries tips.
pub fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), PlatformError> {
    // Verify contract isn't already initialized
    if env.storage().instance().has(&DataKey::Admin) {
        return Err(PlatformError::AlreadyInitialized);
    }

    admin.require_auth();
    env.storage().instance().set(&DataKey::Admin, &admin);
    env.storage()
        .instance()
        .set(&DataKey::PaymentToken, &payment_token);

    env.events()
        .publish((Symbol::new(&env, "init"),), (admin, payment_token));

    Ok(())
}

/// Upgrades the contract with new WASM code. Admin only.
pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), PlatformError> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(PlatformError::NotInitialized)?;

    admin.require_auth();
    env.deployer()
        .update_current_contract_wasm(new_wasm_hash.clone());

    env.events()
        .publish((Symbol::new(&env, "upgrade"),), (admin, new_wasm_hash));

    Ok(())
}

pub fn get_payment_token(env: Env) -> Result<Address, PlatformError> {
    payment_token(&env)
}

/// Assembles the aggregate view from the counters the domain modules
/// maintain; reads only.
pub fn get_platform_stats(env: Env) -> PlatformStats {
    PlatformStats {
        creators_count: creators::creator_count(&env),
        content_count: content::content_count(&env),
        live_rooms_count: rooms::room_count(&env),
        total_tips_amount: tipping::total_tips(&env),
    }
}

pub(crate) fn payment_token(env: &Env) -> Result<Address, PlatformError> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(PlatformError::NotInitialized)
}
