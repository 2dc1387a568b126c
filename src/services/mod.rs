pub mod profit;
pub mod purchase;
pub mod refresh;
pub mod session;
pub mod table;
pub mod transfer;
