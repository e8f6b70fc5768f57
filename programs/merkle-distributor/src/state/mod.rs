pub mod claimed_rewards;
pub mod distributor_config;
pub mod events;
