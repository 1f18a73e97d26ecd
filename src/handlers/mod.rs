pub mod appointments;
pub mod booking;
