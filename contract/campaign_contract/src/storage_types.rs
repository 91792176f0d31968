use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys. The campaign itself is a single instance entry; each
// contributor's running total is its own persistent entry.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Campaign,
    Contribution(Address),
}

// Campaign state, written once by `initialize` and updated in place.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub owner: Address,
    pub token: Address,
    pub funding_goal: i128,
    pub deadline: u64,
    pub total_raised: i128,
    pub paused: bool,
    pub withdrawn: bool,
}

// Custom error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidParameters = 3,
    Unauthorized = 4,
    CampaignPaused = 5,
    DeadlinePassed = 6,
    DeadlineNotReached = 7,
    ZeroContribution = 8,
    GoalNotReached = 9,
    GoalReached = 10,
    AlreadyWithdrawn = 11,
    NothingToRefund = 12,
}

// Constants
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
