use crate::*;

pub fn process_check_rotation(check_rotation_args: &CheckRotationArgs) -> Result<()> {
    let previous = AirdropMerkleTree::new_from_file(&check_rotation_args.previous_tree_path)?;
    let next = AirdropMerkleTree::new_from_file(&check_rotation_args.merkle_tree_path)?;

    if previous.merkle_root == next.merkle_root {
        bail!("both trees have root {}", hex::encode(next.merkle_root));
    }
    next.check_rotation(&previous)?;

    let new_claimants = next.max_num_nodes.saturating_sub(previous.max_num_nodes);
    if next.max_total_claim < previous.max_total_claim {
        warn!(
            "total claim went down from {} to {}",
            previous.max_total_claim, next.max_total_claim
        );
    }
    info!(
        "rotation from {} to {} is safe: {} new claimants, additional funding needed {}",
        hex::encode(previous.merkle_root),
        hex::encode(next.merkle_root),
        new_claimants,
        next.max_total_claim.saturating_sub(previous.max_total_claim)
    );
    Ok(())
}
