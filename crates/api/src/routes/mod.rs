pub mod appointment;
pub mod health;
pub mod hospital;
pub mod session;
