#![no_std]

mod contract;
mod schedule;


pub use contract::{TimedSaleContract, TimedSaleContractClient};
pub use schedule::{SaleWindow, TimedSaleConfig};
