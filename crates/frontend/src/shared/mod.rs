pub mod api_utils;
pub mod date_utils;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod payment_math;
