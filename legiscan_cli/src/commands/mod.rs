pub mod authored;
pub mod bill;
pub mod find_legislator;
pub mod sessions;
pub mod votes;
