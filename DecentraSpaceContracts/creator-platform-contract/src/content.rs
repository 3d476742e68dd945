use crate::creators;
use crate::errors::PlatformError;
use crate::events::{ContentUploaded, ContentViewed};
use crate::types::{Content, DataKey, MAX_CID_LEN, MAX_TITLE_LEN};
use crate::utils::{sequential_id, validate_text};
use soroban_sdk::{Address, Env, String, Symbol, Vec};

pub fn upload_content(
    env: Env,
    caller: Address,
    title: String,
    cid: String,
) -> Result<String, PlatformError> {
    caller.require_auth();

    let mut creator = creators::load_creator(&env, &caller).ok_or(PlatformError::NotRegistered)?;
    validate_text(&title, MAX_TITLE_LEN)?;
    validate_text(&cid, MAX_CID_LEN)?;

    let id = next_content_id(&env);
    let timestamp = env.ledger().timestamp();
    let content = Content {
        id: id.clone(),
        creator: caller.clone(),
        title,
        cid: cid.clone(),
        timestamp,
        tips_received: 0,
        views: 0,
    };
    save_content(&env, &content);

    let mut all = content_list(&env);
    all.push_back(id.clone());
    env.storage().persistent().set(&DataKey::ContentList, &all);

    let mut published = creator_content_ids(&env, &caller);
    published.push_back(id.clone());
    env.storage()
        .persistent()
        .set(&DataKey::CreatorContent(caller.clone()), &published);

    creator.content_count += 1;
    creators::save_creator(&env, &caller, &creator);

    env.events().publish(
        (Symbol::new(&env, "content_uploaded"), caller.clone()),
        ContentUploaded {
            content_id: id.clone(),
            creator: caller,
            cid,
            timestamp,
        },
    );

    Ok(id)
}

/// Any authenticated caller may record a view, including the content's own
/// creator.
pub fn view_content(env: Env, viewer: Address, id: String) -> Result<(), PlatformError> {
    viewer.require_auth();

    let mut content = load_content(&env, &id).ok_or(PlatformError::NotFound)?;
    content.views += 1;
    save_content(&env, &content);

    env.events().publish(
        (Symbol::new(&env, "content_viewed"), viewer.clone()),
        ContentViewed {
            content_id: id,
            viewer,
            views: content.views,
        },
    );

    Ok(())
}

pub fn get_content(env: Env, id: String) -> Result<Content, PlatformError> {
    load_content(&env, &id).ok_or(PlatformError::NotFound)
}

/// Content ids published by the address, in publication order. Empty for
/// addresses with no content.
pub fn get_creator_contents(env: Env, address: Address) -> Vec<String> {
    creator_content_ids(&env, &address)
}

/// All content ids, most recently published first.
pub fn get_latest_content(env: Env) -> Vec<String> {
    let all = content_list(&env);
    let mut latest = Vec::new(&env);
    for i in (0..all.len()).rev() {
        latest.push_back(all.get_unchecked(i));
    }
    latest
}

/// Internal helper to fetch a content record from storage.
pub(crate) fn load_content(env: &Env, id: &String) -> Option<Content> {
    env.storage().persistent().get(&DataKey::Content(id.clone()))
}

/// Internal helper to save a content record to storage.
pub(crate) fn save_content(env: &Env, content: &Content) {
    env.storage()
        .persistent()
        .set(&DataKey::Content(content.id.clone()), content);
}

pub(crate) fn content_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::ContentCounter)
        .unwrap_or(0)
}

// The counter only advances inside successful invocations, so ids are
// gapless and never reused.
fn next_content_id(env: &Env) -> String {
    let counter = content_count(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::ContentCounter, &counter);
    sequential_id(env, "content_", counter)
}

fn content_list(env: &Env) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::ContentList)
        .unwrap_or_else(|| Vec::new(env))
}

fn creator_content_ids(env: &Env, address: &Address) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&DataKey::CreatorContent(address.clone()))
        .unwrap_or_else(|| Vec::new(env))
}
