use crate::errors::PlatformError;
use crate::events::{CreatorRegistered, CreatorUpdated};
use crate::types::{Creator, DataKey, MAX_DESCRIPTION_LEN, MAX_NAME_LEN};
use crate::utils::validate_text;
use soroban_sdk::{Address, Env, String, Symbol, Vec};

pub fn register_creator(
    env: Env,
    caller: Address,
    name: String,
    description: String,
) -> Result<(), PlatformError> {
    caller.require_auth();

    if load_creator(&env, &caller).is_some() {
        return Err(PlatformError::AlreadyRegistered);
    }
    validate_text(&name, MAX_NAME_LEN)?;
    validate_text(&description, MAX_DESCRIPTION_LEN)?;

    let created_at = env.ledger().timestamp();
    let creator = Creator {
        name: name.clone(),
        description,
        total_earnings: 0,
        content_count: 0,
        live_room_count: 0,
        created_at,
    };
    save_creator(&env, &caller, &creator);

    let mut registered = creator_list(&env);
    registered.push_back(caller.clone());
    env.storage()
        .persistent()
        .set(&DataKey::CreatorList, &registered);

    env.events().publish(
        (Symbol::new(&env, "creator_registered"), caller.clone()),
        CreatorRegistered {
            creator: caller,
            name,
            timestamp: created_at,
        },
    );

    Ok(())
}

pub fn update_creator(
    env: Env,
    caller: Address,
    name: String,
    description: String,
) -> Result<(), PlatformError> {
    caller.require_auth();

    let mut creator = load_creator(&env, &caller).ok_or(PlatformError::NotRegistered)?;
    validate_text(&name, MAX_NAME_LEN)?;
    validate_text(&description, MAX_DESCRIPTION_LEN)?;

    // Counters and created_at are untouched by profile updates
    creator.name = name.clone();
    creator.description = description;
    save_creator(&env, &caller, &creator);

    env.events().publish(
        (Symbol::new(&env, "creator_updated"), caller.clone()),
        CreatorUpdated {
            creator: caller,
            name,
        },
    );

    Ok(())
}

/// Returns a zero-valued profile for addresses that never registered, rather
/// than failing. `is_creator_registered` is the existence check; content and
/// room lookups fail with `NotFound` instead.
pub fn get_creator(env: Env, address: Address) -> Creator {
    load_creator(&env, &address).unwrap_or_else(|| Creator {
        name: String::from_str(&env, ""),
        description: String::from_str(&env, ""),
        total_earnings: 0,
        content_count: 0,
        live_room_count: 0,
        created_at: 0,
    })
}

pub fn is_creator_registered(env: Env, address: Address) -> bool {
    env.storage().persistent().has(&DataKey::Creator(address))
}

/// All registered creators, most recently registered first.
pub fn get_featured_creators(env: Env) -> Vec<Address> {
    let registered = creator_list(&env);
    let mut featured = Vec::new(&env);
    for i in (0..registered.len()).rev() {
        featured.push_back(registered.get_unchecked(i));
    }
    featured
}

/// Internal helper to fetch a creator profile from storage.
pub(crate) fn load_creator(env: &Env, address: &Address) -> Option<Creator> {
    env.storage()
        .persistent()
        .get(&DataKey::Creator(address.clone()))
}

/// Internal helper to save a creator profile to storage.
pub(crate) fn save_creator(env: &Env, address: &Address, creator: &Creator) {
    env.storage()
        .persistent()
        .set(&DataKey::Creator(address.clone()), creator);
}

pub(crate) fn creator_count(env: &Env) -> u32 {
    creator_list(env).len()
}

fn creator_list(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::CreatorList)
        .unwrap_or_else(|| Vec::new(env))
}
