use crate::creators;
use crate::errors::PlatformError;
use crate::events::{ParticipantJoined, ParticipantLeft, RoomCreated, RoomStatusChanged};
use crate::types::{DataKey, LiveRoom, MAX_DESCRIPTION_LEN, MAX_LINK_LEN, MAX_TITLE_LEN};
use crate::utils::{sequential_id, validate_text};
use soroban_sdk::{Address, Env, String, Symbol, Vec};

pub fn create_live_room(
    env: Env,
    caller: Address,
    title: String,
    description: String,
    huddle_link: String,
) -> Result<String, PlatformError> {
    caller.require_auth();

    let mut creator = creators::load_creator(&env, &caller).ok_or(PlatformError::NotRegistered)?;
    validate_text(&title, MAX_TITLE_LEN)?;
    validate_text(&description, MAX_DESCRIPTION_LEN)?;
    validate_text(&huddle_link, MAX_LINK_LEN)?;

    let id = next_room_id(&env);
    let created_at = env.ledger().timestamp();
    let room = LiveRoom {
        id: id.clone(),
        creator: caller.clone(),
        title,
        description,
        huddle_link,
        created_at,
        participant_count: 0,
        is_live: true,
    };
    save_room(&env, &room);

    let mut all = room_list(&env);
    all.push_back(id.clone());
    env.storage().persistent().set(&DataKey::RoomList, &all);

    let mut hosted = creator_room_ids(&env, &caller);
    hosted.push_back(id.clone());
    env.storage()
        .persistent()
        .set(&DataKey::CreatorRooms(caller.clone()), &hosted);

    creator.live_room_count += 1;
    creators::save_creator(&env, &caller, &creator);

    env.events().publish(
        (Symbol::new(&env, "room_created"), caller.clone()),
        RoomCreated {
            room_id: id.clone(),
            creator: caller,
            timestamp: created_at,
        },
    );

    Ok(id)
}

/// Only the room's creator may flip the live flag. Re-enabling an ended room
/// is not prevented.
pub fn update_live_room_status(
    env: Env,
    caller: Address,
    id: String,
    is_live: bool,
) -> Result<(), PlatformError> {
    caller.require_auth();

    let mut room = load_room(&env, &id).ok_or(PlatformError::NotFound)?;
    if caller != room.creator {
        return Err(PlatformError::Unauthorized);
    }

    room.is_live = is_live;
    save_room(&env, &room);

    env.events().publish(
        (Symbol::new(&env, "room_status"), caller.clone()),
        RoomStatusChanged {
            room_id: id,
            creator: caller,
            is_live,
        },
    );

    Ok(())
}

/// Joins are raw counter increments; repeat joins by the same address are
/// not de-duplicated.
pub fn join_live_room(env: Env, participant: Address, id: String) -> Result<(), PlatformError> {
    participant.require_auth();

    let mut room = load_room(&env, &id).ok_or(PlatformError::NotFound)?;
    if !room.is_live {
        return Err(PlatformError::RoomNotLive);
    }

    room.participant_count += 1;
    save_room(&env, &room);

    env.events().publish(
        (Symbol::new(&env, "room_joined"), participant.clone()),
        ParticipantJoined {
            room_id: id,
            participant,
            participant_count: room.participant_count,
        },
    );

    Ok(())
}

pub fn leave_live_room(env: Env, participant: Address, id: String) -> Result<(), PlatformError> {
    participant.require_auth();

    let mut room = load_room(&env, &id).ok_or(PlatformError::NotFound)?;

    // The count never underflows; a leave on an empty room is a no-op
    if room.participant_count == 0 {
        return Ok(());
    }

    room.participant_count -= 1;
    save_room(&env, &room);

    env.events().publish(
        (Symbol::new(&env, "room_left"), participant.clone()),
        ParticipantLeft {
            room_id: id,
            participant,
            participant_count: room.participant_count,
        },
    );

    Ok(())
}

pub fn get_live_room(env: Env, id: String) -> Result<LiveRoom, PlatformError> {
    load_room(&env, &id).ok_or(PlatformError::NotFound)
}

/// Room ids created by the address, in creation order. Empty for addresses
/// with no rooms.
pub fn get_creator_live_rooms(env: Env, address: Address) -> Vec<String> {
    creator_room_ids(&env, &address)
}

/// Ids of rooms that are currently live, most recently created first.
pub fn get_active_live_rooms(env: Env) -> Vec<String> {
    let all = room_list(&env);
    let mut active = Vec::new(&env);
    for i in (0..all.len()).rev() {
        let id = all.get_unchecked(i);
        if let Some(room) = load_room(&env, &id) {
            if room.is_live {
                active.push_back(id);
            }
        }
    }
    active
}

/// Internal helper to fetch a room record from storage.
pub(crate) fn load_room(env: &Env, id: &String) -> Option<LiveRoom> {
    env.storage().persistent().get(&DataKey::Room(id.clone()))
}

/// Internal helper to save a room record to storage.
pub(crate) fn save_room(env: &Env, room: &LiveRoom) {
    env.storage()
        .persistent()
        .set(&DataKey::Room(room.id.clone()), room);
}

pub(crate) fn room_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::RoomCounter)
        .unwrap_or(0)
}

// Separate allocator from content; also gapless, also never reused.
fn next_room_id(env: &Env) -> String {
    let counter = room_count(env) + 1;
    env.storage().instance().set(&DataKey::RoomCounter, &counter);
    sequential_id(env, "room_", counter)
}

fn room_list(env: &Env) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::RoomList)
        .unwrap_or_else(|| Vec::new(env))
}

fn creator_room_ids(env: &Env, address: &Address) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::CreatorRooms(address.clone()))
        .unwrap_or_else(|| Vec::new(env))
}
