use soroban_sdk::{contracttype, Address, String};

/// Bounds on user-supplied text. Writes with an empty or oversized field
/// are rejected with `PlatformError::InvalidInput`.
pub const MAX_NAME_LEN: u32 = 100;
pub const MAX_DESCRIPTION_LEN: u32 = 500;
pub const MAX_TITLE_LEN: u32 = 200;
pub const MAX_CID_LEN: u32 = 200;
pub const MAX_LINK_LEN: u32 = 200;

/// Enum representing keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                   // Admin address, set once at initialization
    PaymentToken,            // Token contract that carries tip transfers
    Creator(Address),        // Creator address -> Creator profile
    CreatorList,             // Vec<Address>, registration order
    Content(String),         // Content id -> Content record
    ContentList,             // Vec<String>, publication order
    CreatorContent(Address), // Creator address -> Vec<String> of content ids
    Room(String),            // Room id -> LiveRoom record
    RoomList,                // Vec<String>, creation order
    CreatorRooms(Address),   // Creator address -> Vec<String> of room ids
    ContentCounter,          // u32, sequential id allocator for content
    RoomCounter,             // u32, sequential id allocator for rooms
    TotalTips,               // i128, cumulative tipped amount across all paths
}

/// A registered creator profile, keyed by the registrant's address.
///
/// `total_earnings`, `content_count` and `live_room_count` only ever grow
/// and are mutated exclusively by the content/room/tipping modules.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Creator {
    pub name: String,
    pub description: String,
    pub total_earnings: i128, // Stroops received via any tipping path
    pub content_count: u32,
    pub live_room_count: u32,
    pub created_at: u64, // Ledger timestamp at registration
}

/// A published content record. Immutable after creation except for the
/// `views` and `tips_received` counters.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Content {
    pub id: String, // "content_<n>", n starting at 1
    pub creator: Address,
    pub title: String,
    pub cid: String, // Content-addressed storage identifier, opaque
    pub timestamp: u64,
    pub tips_received: i128,
    pub views: u32,
}

/// A live-session record. `is_live` starts true and is toggled only by the
/// owning creator; `participant_count` tracks raw joins minus leaves.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct LiveRoom {
    pub id: String, // "room_<n>", counter separate from content
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub huddle_link: String, // External join URL, opaque
    pub created_at: u64,
    pub participant_count: u32,
    pub is_live: bool,
}

/// Aggregate platform counters, derived from the global registries.
#[contracttype]
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PlatformStats {
    pub creators_count: u32,
    pub content_count: u32,
    pub live_rooms_count: u32,
    pub total_tips_amount: i128,
}
