#![no_std]
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};

mod admin;
mod content;
mod creators;
mod errors;
mod events;
mod rooms;
mod tipping;
mod traits;
mod types;
mod utils;


pub use errors::PlatformError;
pub use events::*;
pub use traits::CreatorPlatformTrait;
pub use types::{Content, Creator, LiveRoom, PlatformStats};

#[contract]
pub struct CreatorPlatformContract;

#[contractimpl]
impl CreatorPlatformTrait for CreatorPlatformContract {
    fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), PlatformError> {
        admin::initialize(env, admin, payment_token)
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), PlatformError> {
        admin::upgrade(env, new_wasm_hash)
    }

    fn get_payment_token(env: Env) -> Result<Address, PlatformError> {
        admin::get_payment_token(env)
    }

    // Creator registry
    fn register_creator(
        env: Env,
        caller: Address,
        name: String,
        description: String,
    ) -> Result<(), PlatformError> {
        creators::register_creator(env, caller, name, description)
    }

    fn update_creator(
        env: Env,
        caller: Address,
        name: String,
        description: String,
    ) -> Result<(), PlatformError> {
        creators::update_creator(env, caller, name, description)
    }

    fn get_creator(env: Env, address: Address) -> Creator {
        creators::get_creator(env, address)
    }

    fn is_creator_registered(env: Env, address: Address) -> bool {
        creators::is_creator_registered(env, address)
    }

    fn get_featured_creators(env: Env) -> Vec<Address> {
        creators::get_featured_creators(env)
    }

    // Content registry
    fn upload_content(
        env: Env,
        caller: Address,
        title: String,
        cid: String,
    ) -> Result<String, PlatformError> {
        content::upload_content(env, caller, title, cid)
    }

    fn view_content(env: Env, viewer: Address, id: String) -> Result<(), PlatformError> {
        content::view_content(env, viewer, id)
    }

    fn get_content(env: Env, id: String) -> Result<Content, PlatformError> {
        content::get_content(env, id)
    }

    fn get_creator_contents(env: Env, address: Address) -> Vec<String> {
        content::get_creator_contents(env, address)
    }

    fn get_latest_content(env: Env) -> Vec<String> {
        content::get_latest_content(env)
    }

    // Live rooms
    fn create_live_room(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        huddle_link: String,
    ) -> Result<String, PlatformError> {
        rooms::create_live_room(env, caller, title, description, huddle_link)
    }

    fn update_live_room_status(
        env: Env,
        caller: Address,
        id: String,
        is_live: bool,
    ) -> Result<(), PlatformError> {
        rooms::update_live_room_status(env, caller, id, is_live)
    }

    fn join_live_room(env: Env, participant: Address, id: String) -> Result<(), PlatformError> {
        rooms::join_live_room(env, participant, id)
    }

    fn leave_live_room(env: Env, participant: Address, id: String) -> Result<(), PlatformError> {
        rooms::leave_live_room(env, participant, id)
    }

    fn get_live_room(env: Env, id: String) -> Result<LiveRoom, PlatformError> {
        rooms::get_live_room(env, id)
    }

    fn get_creator_live_rooms(env: Env, address: Address) -> Vec<String> {
        rooms::get_creator_live_rooms(env, address)
    }

    fn get_active_live_rooms(env: Env) -> Vec<String> {
        rooms::get_active_live_rooms(env)
    }

    // Tipping
    fn tip_creator(
        env: Env,
        tipper: Address,
        creator: Address,
        amount: i128,
    ) -> Result<(), PlatformError> {
        tipping::tip_creator(env, tipper, creator, amount)
    }

    fn tip_content(
        env: Env,
        tipper: Address,
        id: String,
        amount: i128,
    ) -> Result<(), PlatformError> {
        tipping::tip_content(env, tipper, id, amount)
    }

    fn tip_live_room(
        env: Env,
        tipper: Address,
        id: String,
        amount: i128,
    ) -> Result<(), PlatformError> {
        tipping::tip_live_room(env, tipper, id, amount)
    }

    fn get_platform_stats(env: Env) -> PlatformStats {
        admin::get_platform_stats(env)
    }
}
