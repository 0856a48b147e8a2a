pub mod battle_report;
pub mod beast;
pub mod feature;
pub mod handbook;
pub mod home;
pub mod inventory;
pub mod not_found;
