use crate::admin;
use crate::content;
use crate::creators;
use crate::errors::PlatformError;
use crate::events::{ContentTipped, CreatorTipped, RoomTipped};
use crate::rooms;
use crate::types::{Creator, DataKey};
use soroban_sdk::{token, Address, Env, String, Symbol};

pub fn tip_creator(
    env: Env,
    tipper: Address,
    creator: Address,
    amount: i128,
) -> Result<(), PlatformError> {
    tipper.require_auth();

    validate_amount(amount)?;
    if tipper == creator {
        return Err(PlatformError::CannotTipYourself);
    }
    let mut profile = creators::load_creator(&env, &creator).ok_or(PlatformError::NotRegistered)?;

    send_payment(&env, &tipper, &creator, amount)?;
    credit(&env, &creator, &mut profile, amount);

    env.events().publish(
        (Symbol::new(&env, "creator_tipped"), tipper.clone()),
        CreatorTipped {
            tipper,
            creator,
            amount,
        },
    );

    Ok(())
}

pub fn tip_content(
    env: Env,
    tipper: Address,
    id: String,
    amount: i128,
) -> Result<(), PlatformError> {
    tipper.require_auth();

    validate_amount(amount)?;
    let mut tipped = content::load_content(&env, &id).ok_or(PlatformError::NotFound)?;
    let creator = tipped.creator.clone();
    if tipper == creator {
        return Err(PlatformError::CannotTipYourself);
    }
    let mut profile = creators::load_creator(&env, &creator).ok_or(PlatformError::NotRegistered)?;

    send_payment(&env, &tipper, &creator, amount)?;
    tipped.tips_received = tipped
        .tips_received
        .checked_add(amount)
        .expect("tip overflow");
    content::save_content(&env, &tipped);
    credit(&env, &creator, &mut profile, amount);

    env.events().publish(
        (Symbol::new(&env, "content_tipped"), tipper.clone()),
        ContentTipped {
            tipper,
            content_id: id,
            creator,
            amount,
        },
    );

    Ok(())
}

pub fn tip_live_room(
    env: Env,
    tipper: Address,
    id: String,
    amount: i128,
) -> Result<(), PlatformError> {
    tipper.require_auth();

    validate_amount(amount)?;
    let room = rooms::load_room(&env, &id).ok_or(PlatformError::NotFound)?;
    let creator = room.creator.clone();
    if tipper == creator {
        return Err(PlatformError::CannotTipYourself);
    }
    let mut profile = creators::load_creator(&env, &creator).ok_or(PlatformError::NotRegistered)?;

    send_payment(&env, &tipper, &creator, amount)?;
    credit(&env, &creator, &mut profile, amount);

    env.events().publish(
        (Symbol::new(&env, "room_tipped"), tipper.clone()),
        RoomTipped {
            tipper,
            room_id: id,
            creator,
            amount,
        },
    );

    Ok(())
}

pub(crate) fn total_tips(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalTips)
        .unwrap_or(0)
}

fn validate_amount(amount: i128) -> Result<(), PlatformError> {
    if amount <= 0 {
        return Err(PlatformError::InvalidInput);
    }
    Ok(())
}

// Moves the tip through the configured payment token, straight from tipper
// to creator. The transfer and the accounting writes share one invocation,
// so a failure in either rolls back both.
fn send_payment(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), PlatformError> {
    let token_address = admin::payment_token(env)?;
    let client = token::Client::new(env, &token_address);
    if client.try_transfer(from, to, &amount).is_err() {
        return Err(PlatformError::TransferFailed);
    }
    Ok(())
}

// Every credited stroop lands in exactly two places: the creator's earnings
// and the platform total.
fn credit(env: &Env, address: &Address, profile: &mut Creator, amount: i128) {
    profile.total_earnings = profile
        .total_earnings
        .checked_add(amount)
        .expect("earnings overflow");
    creators::save_creator(env, address, profile);

    let new_total = total_tips(env).checked_add(amount).expect("tips overflow");
    env.storage().instance().set(&DataKey::TotalTips, &new_total);
}
