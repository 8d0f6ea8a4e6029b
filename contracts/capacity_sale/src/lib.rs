#![no_std]

mod contract;
mod rules;


pub use contract::{CapacitySaleContract, CapacitySaleContractClient};
pub use rules::CapacitySaleConfig;
