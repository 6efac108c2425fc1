pub mod events;
pub mod health;
pub mod medications;
pub mod pets;
pub mod reminders;
pub mod vaccinations;
pub mod weights;
