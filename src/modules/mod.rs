pub mod accounts;
pub mod auth;
pub mod classes;
pub mod courses;
pub mod languages;
pub mod lessons;
pub mod roles;
pub mod timetables;
