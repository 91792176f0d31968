use soroban_sdk::{contracttype, Address, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub owner: Address,
    pub funding_goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributionEvent {
    pub contributor: Address,
    pub amount: i128,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignPausedEvent {
    pub owner: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignResumedEvent {
    pub owner: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawalEvent {
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundEvent {
    pub contributor: Address,
    pub amount: i128,
    pub total_raised: i128,
}

pub fn emit_campaign_created(
    env: &soroban_sdk::Env,
    event: CampaignCreatedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_contribution(
    env: &soroban_sdk::Env,
    event: ContributionEvent,
) {
    env.events().publish(
        (Symbol::new(env, "contribution_received"),),
        event,
    );
}

pub fn emit_campaign_paused(
    env: &soroban_sdk::Env,
    event: CampaignPausedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "campaign_paused"),),
        event,
    );
}

pub fn emit_campaign_resumed(
    env: &soroban_sdk::Env,
    event: CampaignResumedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "campaign_resumed"),),
        event,
    );
}

pub fn emit_withdrawal(
    env: &soroban_sdk::Env,
    event: WithdrawalEvent,
) {
    env.events().publish(
        (Symbol::new(env, "funds_withdrawn"),),
        event,
    );
}

pub fn emit_refund(
    env: &soroban_sdk::Env,
    event: RefundEvent,
) {
    env.events().publish(
        (Symbol::new(env, "contribution_refunded"),),
        event,
    );
}
