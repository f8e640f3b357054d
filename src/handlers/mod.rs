// Handlers organized by security tier:
// public (no auth) -> protected (session required) -> admin (session + admin role)

pub mod admin;
pub mod protected;
pub mod public;
