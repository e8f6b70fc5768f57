pub use claim::*;
pub use initialize::*;
pub use set_admin::*;
pub use shutdown::*;
pub use update_root::*;

pub mod claim;
pub mod initialize;
pub mod set_admin;
pub mod shutdown;
pub mod update_root;
