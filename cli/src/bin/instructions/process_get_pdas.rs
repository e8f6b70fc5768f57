use crate::*;

pub fn process_get_pdas(args: &Args, get_pdas_args: &GetPdasArgs) {
    let (config, bump) = get_distributor_config_pda(&args.program_id);
    println!("distributor config: {config}, bump: {bump}");

    if let Some(claimant) = get_pdas_args.claimant {
        let (claimed_rewards, bump) = get_claimed_rewards_pda(&args.program_id, &claimant);
        println!("claimed rewards for {claimant}: {claimed_rewards}, bump: {bump}");
    }
}
