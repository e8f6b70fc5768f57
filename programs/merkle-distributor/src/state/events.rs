use anchor_lang::{event, prelude::*};

/// Emitted when tokens are claimed.
#[event]
pub struct ClaimedEvent {
    /// User that claimed.
    pub claimant: Pubkey,
    /// Amount transferred by this claim.
    pub amount: u64,
    /// Cumulative amount claimed after this claim.
    pub total_claimed: u64,
}

/// Emitted when the admin publishes a new root.
#[event]
pub struct RootUpdatedEvent {
    pub old_root: [u8; 32],
    pub new_root: [u8; 32],
}

#[event]
pub struct AdminUpdatedEvent {
    pub old_admin: Pubkey,
    pub new_admin: Pubkey,
}

/// Emitted once, when the distributor stops accepting claims.
#[event]
pub struct ShutdownEvent {
    pub admin: Pubkey,
    /// Vault balance swept back to the admin.
    pub swept_amount: u64,
}
