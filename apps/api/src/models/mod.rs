pub mod profile;
pub mod roadmap;
pub mod session;
pub mod skill;
