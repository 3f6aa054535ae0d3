pub mod component;
pub mod gateway;
pub mod minimums;
pub mod team;

pub use component::{component_name, ComponentType};
pub use gateway::Gateway;
pub use minimums::minimum_charge;
pub use team::Team;
