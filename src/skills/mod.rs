mod dto;
pub mod service;
pub mod store;

pub use dto::{
    CreateRequestBody, CreateSkillRequest, SkillQuery, UpdateRequestStatusBody, UpdateSkillRequest,
};
pub use service::SkillsService;
pub use store::{SkillsState, Tracked};
