use anchor_lang::{
    account,
    prelude::{Pubkey, *},
};
use merkle_verify::{hash_leaf, verify};

use crate::error::ErrorCode;

/// State for the account which distributes tokens.
///
/// There is one config per program. The root and admin can change over its lifetime;
/// `shutdown` can only ever move from `false` to `true`.
#[account]
#[derive(Default, Debug)]
pub struct DistributorConfig {
    /// Bump seed.
    pub bump: u8,
    /// Set by `initialize`; a second initialize is rejected.
    pub initialized: bool,
    /// The 256-bit merkle root of cumulative entitlements.
    pub root: [u8; 32],
    /// [Mint] of the token to be distributed.
    pub mint: Pubkey,
    /// Token Address of the vault
    pub token_vault: Pubkey,
    /// Admin wallet
    pub admin: Pubkey,
    /// Whether claims are still accepted
    pub shutdown: bool,
}

impl DistributorConfig {
    pub const SEED: &'static [u8] = b"DistributorConfig";
    pub const LEN: usize = 8 + std::mem::size_of::<DistributorConfig>();

    /// Seeds the config with an all-zero root. No claim can verify against the zero root
    /// until the admin publishes a real one.
    pub fn initialize(
        &mut self,
        bump: u8,
        mint: Pubkey,
        token_vault: Pubkey,
        admin: Pubkey,
    ) -> std::result::Result<(), ErrorCode> {
        if self.initialized {
            return Err(ErrorCode::AlreadyInitialized);
        }

        self.bump = bump;
        self.initialized = true;
        self.root = [0u8; 32];
        self.mint = mint;
        self.token_vault = token_vault;
        self.admin = admin;
        self.shutdown = false;

        Ok(())
    }

    /// When the program data account is supplied, only the upgrade authority may become
    /// admin. An immutable program (no upgrade authority) cannot be initialized that way.
    pub fn check_upgrade_authority(
        upgrade_authority: Option<Pubkey>,
        admin: &Pubkey,
    ) -> std::result::Result<(), ErrorCode> {
        if upgrade_authority != Some(*admin) {
            return Err(ErrorCode::Unauthorized);
        }
        Ok(())
    }

    pub fn update_root(
        &mut self,
        caller: &Pubkey,
        new_root: [u8; 32],
    ) -> std::result::Result<(), ErrorCode> {
        self.check_admin(caller)?;
        if self.root == new_root {
            return Err(ErrorCode::SameValue);
        }

        self.root = new_root;
        Ok(())
    }

    pub fn set_admin(
        &mut self,
        caller: &Pubkey,
        new_admin: Pubkey,
    ) -> std::result::Result<(), ErrorCode> {
        self.check_admin(caller)?;
        if self.admin == new_admin {
            return Err(ErrorCode::SameValue);
        }

        self.admin = new_admin;
        Ok(())
    }

    /// Stops all future claims. There is no way back.
    pub fn shutdown(&mut self, caller: &Pubkey) -> std::result::Result<(), ErrorCode> {
        self.check_admin(caller)?;
        if self.shutdown {
            return Err(ErrorCode::Shutdown);
        }

        self.shutdown = true;
        Ok(())
    }

    /// Whether `proof` places `(claimant, total_amount)` under the current root.
    pub fn verify_claim(&self, claimant: &Pubkey, total_amount: u64, proof: &[[u8; 32]]) -> bool {
        verify(proof, self.root, hash_leaf(claimant, total_amount))
    }

    fn check_admin(&self, caller: &Pubkey) -> std::result::Result<(), ErrorCode> {
        if *caller != self.admin {
            return Err(ErrorCode::Unauthorized);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initialized(admin: Pubkey) -> DistributorConfig {
        let mut config = DistributorConfig::default();
        config
            .initialize(254, Pubkey::new_unique(), Pubkey::new_unique(), admin)
            .unwrap();
        config
    }

    #[test]
    fn test_initialize() {
        let admin = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let mut config = DistributorConfig::default();
        config.initialize(255, mint, vault, admin).unwrap();

        assert!(config.initialized);
        assert_eq!(config.bump, 255);
        assert_eq!(config.root, [0u8; 32]);
        assert_eq!(config.mint, mint);
        assert_eq!(config.token_vault, vault);
        assert_eq!(config.admin, admin);
        assert!(!config.shutdown);
    }

    #[test]
    fn test_initialize_twice_is_rejected() {
        let admin = Pubkey::new_unique();
        let mut config = initialized(admin);
        config.update_root(&admin, [7u8; 32]).unwrap();

        let err = config
            .initialize(1, Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique())
            .unwrap_err();
        assert!(matches!(err, ErrorCode::AlreadyInitialized));
        // untouched
        assert_eq!(config.admin, admin);
        assert_eq!(config.root, [7u8; 32]);
    }

    #[test]
    fn test_only_upgrade_authority_may_initialize() {
        let deployer = Pubkey::new_unique();
        assert!(DistributorConfig::check_upgrade_authority(Some(deployer), &deployer).is_ok());

        let err = DistributorConfig::check_upgrade_authority(Some(deployer), &Pubkey::new_unique())
            .unwrap_err();
        assert!(matches!(err, ErrorCode::Unauthorized));

        let err = DistributorConfig::check_upgrade_authority(None, &deployer).unwrap_err();
        assert!(matches!(err, ErrorCode::Unauthorized));
    }

    #[test]
    fn test_update_root() {
        let admin = Pubkey::new_unique();
        let mut config = initialized(admin);

        config.update_root(&admin, [1u8; 32]).unwrap();
        assert_eq!(config.root, [1u8; 32]);

        let err = config.update_root(&admin, [1u8; 32]).unwrap_err();
        assert!(matches!(err, ErrorCode::SameValue));

        let err = config
            .update_root(&Pubkey::new_unique(), [2u8; 32])
            .unwrap_err();
        assert!(matches!(err, ErrorCode::Unauthorized));
        assert_eq!(config.root, [1u8; 32]);
    }

    #[test]
    fn test_update_root_to_zero_on_fresh_config_is_same_value() {
        let admin = Pubkey::new_unique();
        let mut config = initialized(admin);
        let err = config.update_root(&admin, [0u8; 32]).unwrap_err();
        assert!(matches!(err, ErrorCode::SameValue));
    }

    #[test]
    fn test_set_admin() {
        let admin = Pubkey::new_unique();
        let new_admin = Pubkey::new_unique();
        let mut config = initialized(admin);

        let err = config.set_admin(&admin, admin).unwrap_err();
        assert!(matches!(err, ErrorCode::SameValue));

        let err = config
            .set_admin(&Pubkey::new_unique(), new_admin)
            .unwrap_err();
        assert!(matches!(err, ErrorCode::Unauthorized));

        config.set_admin(&admin, new_admin).unwrap();
        assert_eq!(config.admin, new_admin);

        // the old admin has lost its rights
        let err = config.update_root(&admin, [3u8; 32]).unwrap_err();
        assert!(matches!(err, ErrorCode::Unauthorized));
        config.update_root(&new_admin, [3u8; 32]).unwrap();
    }

    #[test]
    fn test_unauthorized_is_checked_before_same_value() {
        let admin = Pubkey::new_unique();
        let mut config = initialized(admin);
        let err = config
            .update_root(&Pubkey::new_unique(), [0u8; 32])
            .unwrap_err();
        assert!(matches!(err, ErrorCode::Unauthorized));
    }

    #[test]
    fn test_shutdown_is_terminal() {
        let admin = Pubkey::new_unique();
        let mut config = initialized(admin);

        let err = config.shutdown(&Pubkey::new_unique()).unwrap_err();
        assert!(matches!(err, ErrorCode::Unauthorized));
        assert!(!config.shutdown);

        config.shutdown(&admin).unwrap();
        assert!(config.shutdown);

        let err = config.shutdown(&admin).unwrap_err();
        assert!(matches!(err, ErrorCode::Shutdown));

        // rotating the root does not re-open claims
        config.update_root(&admin, [5u8; 32]).unwrap();
        assert!(config.shutdown);
    }
}
