#![no_std]

mod events;
mod storage_types;


use soroban_sdk::{contract, contractimpl, token, Address, Env};
use storage_types::{DataKey, TTL_INSTANCE, TTL_PERSISTENT};

pub use storage_types::{Campaign, CampaignError};

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Create the campaign. Called exactly once after deployment; the
    /// deadline is fixed at `now + duration_seconds`.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        funding_goal: i128,
        duration_seconds: u64,
    ) -> Result<(), CampaignError> {
        if env.storage().instance().has(&DataKey::Campaign) {
            return Err(CampaignError::AlreadyInitialized);
        }

        owner.require_auth();

        if funding_goal <= 0 || duration_seconds == 0 {
            return Err(CampaignError::InvalidParameters);
        }

        let deadline = env
            .ledger()
            .timestamp()
            .checked_add(duration_seconds)
            .ok_or(CampaignError::InvalidParameters)?;

        let campaign = Campaign {
            owner: owner.clone(),
            token,
            funding_goal,
            deadline,
            total_raised: 0,
            paused: false,
            withdrawn: false,
        };

        save_campaign(&env, &campaign);
        extend_instance(&env);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                owner,
                funding_goal,
                deadline,
            },
        );

        Ok(())
    }

    /// Contribute `amount` of the campaign token. Open to anyone until the
    /// deadline while the campaign is not paused; contributions past the
    /// goal are accepted.
    pub fn contribute(env: Env, contributor: Address, amount: i128) -> Result<(), CampaignError> {
        contributor.require_auth();

        let mut campaign = load_campaign(&env)?;

        if campaign.paused {
            return Err(CampaignError::CampaignPaused);
        }
        if env.ledger().timestamp() >= campaign.deadline {
            return Err(CampaignError::DeadlinePassed);
        }
        if amount <= 0 {
            return Err(CampaignError::ZeroContribution);
        }

        let token_client = token::Client::new(&env, &campaign.token);
        token_client.transfer(&contributor, &env.current_contract_address(), &amount);

        let key = DataKey::Contribution(contributor.clone());
        let contributed: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        env.storage().persistent().set(&key, &(contributed + amount));
        extend_contribution(&env, &key);

        campaign.total_raised += amount;
        save_campaign(&env, &campaign);
        extend_instance(&env);

        events::emit_contribution(
            &env,
            events::ContributionEvent {
                contributor,
                amount,
                total_raised: campaign.total_raised,
            },
        );

        Ok(())
    }

    /// Suspend contribution acceptance. Owner only; idempotent.
    pub fn pause(env: Env, caller: Address) -> Result<(), CampaignError> {
        caller.require_auth();

        let mut campaign = load_campaign(&env)?;
        if caller != campaign.owner {
            return Err(CampaignError::Unauthorized);
        }

        campaign.paused = true;
        save_campaign(&env, &campaign);
        extend_instance(&env);

        events::emit_campaign_paused(&env, events::CampaignPausedEvent { owner: caller });

        Ok(())
    }

    /// Reopen contribution acceptance. Owner only; idempotent.
    pub fn resume(env: Env, caller: Address) -> Result<(), CampaignError> {
        caller.require_auth();

        let mut campaign = load_campaign(&env)?;
        if caller != campaign.owner {
            return Err(CampaignError::Unauthorized);
        }

        campaign.paused = false;
        save_campaign(&env, &campaign);
        extend_instance(&env);

        events::emit_campaign_resumed(&env, events::CampaignResumedEvent { owner: caller });

        Ok(())
    }

    /// Pay the raised funds to the owner. Allowed once, at or after the
    /// deadline, when the goal was met. `total_raised` stays in place as
    /// the record of the settled amount.
    pub fn withdraw(env: Env, caller: Address) -> Result<(), CampaignError> {
        caller.require_auth();

        let mut campaign = load_campaign(&env)?;

        if caller != campaign.owner {
            return Err(CampaignError::Unauthorized);
        }
        if env.ledger().timestamp() < campaign.deadline {
            return Err(CampaignError::DeadlineNotReached);
        }
        if campaign.total_raised < campaign.funding_goal {
            return Err(CampaignError::GoalNotReached);
        }
        if campaign.withdrawn {
            return Err(CampaignError::AlreadyWithdrawn);
        }

        let amount = campaign.total_raised;
        campaign.withdrawn = true;
        save_campaign(&env, &campaign);
        extend_instance(&env);

        // A failed transfer traps and rolls back the flag above.
        let token_client = token::Client::new(&env, &campaign.token);
        token_client.transfer(&env.current_contract_address(), &caller, &amount);

        events::emit_withdrawal(&env, events::WithdrawalEvent { owner: caller, amount });

        Ok(())
    }

    /// Reclaim a contribution. Allowed at or after the deadline when the
    /// goal was missed; pays back the caller's full entry and removes it.
    pub fn refund(env: Env, contributor: Address) -> Result<(), CampaignError> {
        contributor.require_auth();

        let mut campaign = load_campaign(&env)?;

        if env.ledger().timestamp() < campaign.deadline {
            return Err(CampaignError::DeadlineNotReached);
        }
        if campaign.total_raised >= campaign.funding_goal {
            return Err(CampaignError::GoalReached);
        }

        let key = DataKey::Contribution(contributor.clone());
        let amount: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        if amount == 0 {
            return Err(CampaignError::NothingToRefund);
        }

        env.storage().persistent().remove(&key);
        campaign.total_raised -= amount;
        save_campaign(&env, &campaign);
        extend_instance(&env);

        let token_client = token::Client::new(&env, &campaign.token);
        token_client.transfer(&env.current_contract_address(), &contributor, &amount);

        events::emit_refund(
            &env,
            events::RefundEvent {
                contributor,
                amount,
                total_raised: campaign.total_raised,
            },
        );

        Ok(())
    }

    /// Current contribution balance for `contributor`; 0 if none.
    pub fn get_contribution(env: Env, contributor: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Contribution(contributor))
            .unwrap_or(0)
    }

    /// Snapshot of the campaign state.
    pub fn get_campaign(env: Env) -> Result<Campaign, CampaignError> {
        load_campaign(&env)
    }
}

// Helper functions
fn load_campaign(e: &Env) -> Result<Campaign, CampaignError> {
    e.storage()
        .instance()
        .get(&DataKey::Campaign)
        .ok_or(CampaignError::NotInitialized)
}

fn save_campaign(e: &Env, campaign: &Campaign) {
    e.storage().instance().set(&DataKey::Campaign, campaign);
}

fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_contribution(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}
