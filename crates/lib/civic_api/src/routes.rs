//! Route paths served by the API.

use civic_core::models::Persona;

pub const POST_API_CHAT: &str = Persona::General.path();
pub const POST_API_LAWBOT: &str = Persona::Legal.path();
pub const POST_API_TALK2GOV: &str = Persona::Government.path();
pub const POST_API_TRANSLATE: &str = Persona::Translator.path();
pub const GET_API_HEALTH: &str = "/api/health";
