pub mod appointment;
pub mod hospital;
pub mod session;
