/// Length of the mock one-time code.
pub const OTP_LENGTH: usize = 4;

/// Accepts exactly four ASCII digits. There is no stored code to compare against.
pub fn is_acceptable_otp(otp: &str) -> bool {
    otp.len() == OTP_LENGTH && otp.bytes().all(|b| b.is_ascii_digit())
}
