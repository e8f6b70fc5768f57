use crate::*;

pub fn process_get_proof(get_proof_args: &GetProofArgs) -> Result<UserProof> {
    let merkle_tree = AirdropMerkleTree::new_from_file(&get_proof_args.merkle_tree_path)?;
    let node = merkle_tree
        .get_node(&get_proof_args.claimant)
        .ok_or_else(|| anyhow!("claimant {} not found in tree", get_proof_args.claimant))?;

    Ok(UserProof {
        claimant: node.claimant.to_string(),
        amount: node.amount,
        merkle_root: hex::encode(merkle_tree.merkle_root),
        proof: node
            .proof
            .clone()
            .ok_or_else(|| anyhow!("proof not found for {}", node.claimant))?,
    })
}
