use crate::*;

pub fn process_create_merkle_tree(merkle_tree_args: &CreateMerkleTreeArgs) -> Result<()> {
    let csv_entries = CsvEntry::new_from_file(&merkle_tree_args.csv_path)?;
    info!(
        "read {} entries from {}",
        csv_entries.len(),
        merkle_tree_args.csv_path.display()
    );

    let merkle_tree = AirdropMerkleTree::new_from_entries(csv_entries)?;
    merkle_tree.write_to_file(&merkle_tree_args.merkle_tree_path)?;

    info!(
        "wrote merkle tree with root {} to {}",
        hex::encode(merkle_tree.merkle_root),
        merkle_tree_args.merkle_tree_path.display()
    );
    Ok(())
}
