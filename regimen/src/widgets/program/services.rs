use regimen_ui_tree::NodeId;

/// Generate a fresh item identifier.
pub fn new_node_id() -> NodeId {
    NodeId::new(uuid::Uuid::new_v4().to_string())
}

/// Generate a fresh block identifier.
pub fn new_block_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Return the display name of the block at `index` ("Block A", "Block B", ...).
pub fn block_name(index: usize) -> String {
    match u8::try_from(index) {
        Ok(offset) if offset < 26 => {
            format!("Block {}", char::from(b'A' + offset))
        },
        _ => format!("Block {}", index + 1),
    }
}
