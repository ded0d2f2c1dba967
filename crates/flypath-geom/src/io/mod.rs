/// Plain text point series reader and writer.
pub mod points;
