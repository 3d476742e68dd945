use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatorRegistered {
    pub creator: Address,
    pub name: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatorUpdated {
    pub creator: Address,
    pub name: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContentUploaded {
    pub content_id: String,
    pub creator: Address,
    pub cid: String,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContentViewed {
    pub content_id: String,
    pub viewer: Address,
    pub views: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoomCreated {
    pub room_id: String,
    pub creator: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoomStatusChanged {
    pub room_id: String,
    pub creator: Address,
    pub is_live: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantJoined {
    pub room_id: String,
    pub participant: Address,
    pub participant_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantLeft {
    pub room_id: String,
    pub participant: Address,
    pub participant_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreatorTipped {
    pub tipper: Address,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContentTipped {
    pub tipper: Address,
    pub content_id: String,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoomTipped {
    pub tipper: Address,
    pub room_id: String,
    pub creator: Address,
    pub amount: i128,
}
