// Mock phone authentication. Nothing is sent and nothing is secret:
// any four-digit code verifies.

pub mod handlers;
pub mod otp;
