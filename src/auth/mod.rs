mod dto;
pub mod service;
pub mod session;

pub use dto::{
    AuthResponse, ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
    ResetPasswordRequest, UpdateProfileRequest,
};
pub use service::AuthService;
pub use session::Session;
